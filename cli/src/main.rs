use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bookrank::ranking::{self, Popularity};
use bookrank::BookClub;

use crate::config::Config;
use crate::scenario::{QueryResult, Scenario};

mod config;
mod scenario;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let stdout = std::io::stdout();
    execute(&config, &mut stdout.lock())
}

fn execute(config: &Config, out: &mut impl Write) -> Result<()> {
    let scenario = load_scenario(config)?;
    let network = scenario.build(book_club(config))?;

    info!("Running {} queries...", scenario.queries.len());
    let mut results = Vec::with_capacity(scenario.queries.len());
    for query in &scenario.queries {
        results.push(network.run(query)?);
    }

    if config.json {
        serde_json::to_writer_pretty(&mut *out, &results).context("write json")?;
        writeln!(out)?;
    } else {
        write_text(&results, out)?;
    }
    Ok(())
}

fn load_scenario(config: &Config) -> Result<Scenario> {
    match &config.scenario {
        None => Ok(Scenario::demo()),
        Some(path) => Scenario::load(path),
    }
}

fn book_club(config: &Config) -> BookClub {
    let ranking_config = ranking::Config {
        order: config.order.create_impl(),
    };
    BookClub::new().ranker(Popularity::with_config(ranking_config))
}

fn write_text(results: &[QueryResult], out: &mut impl Write) -> Result<()> {
    for result in results {
        writeln!(out, "{}:", result.title)?;
        for book in &result.books {
            writeln!(out, "  {}", book)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use anyhow::Result;
    use tempfile::NamedTempFile;

    use crate::config::{Config, OrderName};
    use crate::execute;

    fn test_config() -> Config {
        Config {
            scenario: None,
            order: OrderName::Ascending,
            json: false,
        }
    }

    fn run(config: &Config) -> Result<String> {
        let mut out = Vec::new();
        execute(config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn demo_text() -> Result<()> {
        let output = run(&test_config())?;
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3 + 3 + 2 + 3);
        assert_eq!(lines[0], "All books of Kevin:");
        assert_eq!(lines[4], "Top 2 books of Kevin that friends have read:");
        assert_eq!(lines[7], "Top 3 books in the network of Kevin up to depth 3:");
        assert!(lines[8].starts_with("  Book2 ("));
        Ok(())
    }

    #[test]
    fn demo_json() -> Result<()> {
        let mut config = test_config();
        config.json = true;
        let output = run(&config)?;
        let value: serde_json::Value = serde_json::from_str(&output)?;
        let results = value.as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[1]["books"].as_array().unwrap().len(), 2);
        assert_eq!(results[2]["books"][0]["name"], "Book2");
        Ok(())
    }

    #[test]
    fn descending() -> Result<()> {
        let mut config = test_config();
        config.order = OrderName::Descending;
        let output = run(&config)?;
        assert!(!output.contains("  Book2 ("));
        Ok(())
    }

    #[test]
    fn scenario_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                "books": ["A"],
                "users": [{{ "name": "x", "books": ["A"] }}],
                "queries": [{{ "kind": "books", "user": "x" }}]
            }}"#
        )?;
        let mut config = test_config();
        config.scenario = Some(file.path().to_path_buf());
        let output = run(&config)?;
        assert!(output.starts_with("All books of x:\n  A ("));
        Ok(())
    }

    #[test]
    fn scenario_without_queries() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"{{ "books": ["A"] }}"#)?;
        let mut config = test_config();
        config.scenario = Some(file.path().to_path_buf());
        assert_eq!(run(&config)?, "");
        Ok(())
    }

    #[test]
    fn missing_scenario() {
        let mut config = test_config();
        config.scenario = Some(PathBuf::from("does/not/exist.json"));
        assert!(run(&config).is_err());
    }
}
