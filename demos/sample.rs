//! Sample Application
//!
//! An API method backed by a fake filesystem. Failures from both layers are
//! tagged, then counted per namespace and logged by tag.

use std::collections::BTreeMap;

use error_tag::prelude::*;
use error_tag::tracing_ext::TraceTagExt;

mod fs {
    use error_tag::prelude::*;

    namespace!(pub FsErr);
    tag! {
        pub Unsupported in FsErr;
        pub NotFound in FsErr;
    }

    pub fn read_file(filename: &str) -> TaggedResult<String> {
        let Some(name) = filename.strip_prefix("/tmp/") else {
            return Err(tagged!(Unsupported, "only /tmp can be read"));
        };

        if filename == "/tmp/missing" {
            return Err(tagged!(NotFound, "file not found: {:?}", filename));
        }

        Ok(name.to_owned())
    }
}

mod api {
    use error_tag::prelude::*;

    use crate::fs;

    const FILES: [&str; 4] = ["/var/log/foo.log", "/tmp/missing", "/tmp/some_file", "/tmp/some_other_file"];

    namespace!(pub ApiErr);
    tag! {
        pub OversizedA in ApiErr;
        pub Internal in ApiErr;
    }

    pub fn method_foo(a: usize, b: usize) -> TaggedResult<String> {
        if a > b {
            return Err(tagged!(OversizedA, "a ({}) is larger than b ({})", a, b));
        }
        if a > 8 {
            return Err(tagged!(OversizedA, "a is larger than max supported value"));
        }

        fs::read_file(FILES[(a + b) % FILES.len()]).map_err(|err| {
            tagged!(Internal, source = err, "a + b = {} resulted in error: {}", a + b, err)
        })
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mut api_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut fs_counts: BTreeMap<String, usize> = BTreeMap::new();

    for a in 0..10 {
        for b in 0..10 {
            let err = match api::method_foo(a, b).trace_tags() {
                Ok(contents) => {
                    tracing::info!(a, b, %contents, "success");
                    continue;
                },
                Err(err) => err,
            };

            let mut api_err = Extractor::<api::ApiErr>::new();
            if api_err.fill_from(&err) {
                if let Some(id) = api_err.tag() {
                    *api_counts.entry(id.to_string()).or_default() += 1;
                }
            }

            if let Some(fs_err) = err.find_in::<fs::FsErr>() {
                *fs_counts.entry(fs_err.tag().to_string()).or_default() += 1;
            }

            for link in err.links() {
                let Some(link) = error_tag::chain::as_tagged(link) else { continue };
                if link.is::<api::OversizedA>() {
                    tracing::error!(a, b, "bad params");
                } else if by_namespace::<fs::FsErr>().accepts(link) {
                    tracing::error!(err = %link, "underlying failure");
                }
            }
        }
    }

    println!("api error counts");
    for (tag, count) in &api_counts {
        println!("{}: {}", tag, count);
    }
    println!();

    println!("fs error counts");
    for (tag, count) in &fs_counts {
        println!("{}: {}", tag, count);
    }
    println!();
}
