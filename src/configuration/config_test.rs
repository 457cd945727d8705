use std::env;

use anyhow::Result;

use super::Config;
use super::BASE_URL_ENV;
use super::DEFAULT_BASE_URL;
use crate::application::cli;

// Env manipulation is process-global, so every base URL case lives in one
// test to keep them from racing each other.
#[test]
fn it_resolves_the_base_url_in_priority_order() -> Result<()> {
    env::remove_var(BASE_URL_ENV);

    let matches = cli::build().try_get_matches_from(vec!["quill", "text", "hi"])?;
    let sub = matches.subcommand_matches("text").unwrap();
    assert_eq!(Config::resolve(sub).base_url, DEFAULT_BASE_URL);

    env::set_var(BASE_URL_ENV, "http://env.example:9000");
    let matches = cli::build().try_get_matches_from(vec!["quill", "text", "hi"])?;
    let sub = matches.subcommand_matches("text").unwrap();
    assert_eq!(Config::resolve(sub).base_url, "http://env.example:9000");

    let matches = cli::build().try_get_matches_from(vec![
        "quill",
        "--base-url",
        "http://flag.example:7000",
        "text",
        "hi",
    ])?;
    let sub = matches.subcommand_matches("text").unwrap();
    assert_eq!(Config::resolve(sub).base_url, "http://flag.example:7000");

    env::remove_var(BASE_URL_ENV);
    return Ok(());
}

#[test]
fn it_leaves_unset_options_out() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["quill", "text", "hi"])?;
    let sub = matches.subcommand_matches("text").unwrap();
    let config = Config::resolve(sub);

    assert_eq!(config.model, None);
    assert_eq!(config.system_instruction, None);
    assert_eq!(config.provider, None);

    let options = config.generate_options();
    assert_eq!(options.model, None);
    assert_eq!(options.system_instruction, None);
    assert_eq!(options.provider, None);

    return Ok(());
}

#[test]
fn it_picks_up_generation_flags() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "quill",
        "--model",
        "gemini-2.0-flash",
        "--provider",
        "gemini",
        "--system-instruction",
        "Be brief.",
        "text",
        "hi",
    ])?;
    let sub = matches.subcommand_matches("text").unwrap();
    let config = Config::resolve(sub);

    assert_eq!(config.model, Some("gemini-2.0-flash".to_string()));
    assert_eq!(config.provider, Some("gemini".to_string()));
    assert_eq!(config.system_instruction, Some("Be brief.".to_string()));

    return Ok(());
}
