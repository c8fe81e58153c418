use crate::{
    args::{DomainArgs, TweetArgs},
    extract,
};
use colored::Colorize;
use log::debug;

/// Print the domain for each url.
pub fn domain(args: DomainArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    for url in &args.urls {
        let domain = extract::extract_domain(url);

        if domain.is_empty() {
            println!("{}: {}", url, "invalid url".red());
        } else {
            println!("{}: {}", url, domain.blue());
        }
    }

    Ok(())
}

/// Print the tweet id for each url.
pub fn tweet(args: TweetArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    for url in &args.urls {
        match extract::get_tweet_id(url) {
            Some(tweet_id) => println!("{}: {}", url, tweet_id.blue()),
            None => println!("{}: {}", url, "no tweet".red()),
        }
    }

    Ok(())
}
