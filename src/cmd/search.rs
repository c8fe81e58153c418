use crate::{args::QueryArgs, search};
use anyhow::anyhow;
use log::debug;

/// Print the full-text search query for the given search terms.
pub fn query(args: QueryArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    let query = search::build_ts_query(&args.terms.join(" "));

    if query.is_empty() {
        return Err(anyhow!("Missing search terms: `booktriage query <terms>`"));
    }

    println!("{query}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_empty() {
        let args = QueryArgs {
            terms: vec!["!@#".to_owned()],
        };
        assert!(query(args).is_err());
    }

    #[test]
    fn test_query() {
        let args = QueryArgs {
            terms: vec!["React".to_owned(), "HOOKS".to_owned()],
        };
        assert!(query(args).is_ok());
    }
}
