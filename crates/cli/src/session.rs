//! Interactive session: one command per line, each one re-renders the list.
//!
//! Errors are reported and the session keeps its previous state.

use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use jobboard_core::application::{Direction, JobBoard, Precedence, SortOrder};
use jobboard_core::domain::SchemaChoice;
use jobboard_core::port::{JobSource, Presenter};
use jobboard_infra_source::{FileJobSource, HttpJobSource};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::output;
use crate::presenter::TablePresenter;

const PROMPT: &str = "jobboard> ";

const HELP: &str = "\
Commands:
  list                              show the current view
  filter <level|type|skill> [VALUE] set a filter (no value clears it;
                                    quote it to keep edge spaces: \" Expert\")
  sort <title|time> <asc|desc|none> set a sort rule
  precedence <time|title>           which sort rule wins when both are set
  show <N>                          details of the N-th listed job
  options                           distinct levels, types and skills
  load <file|url> <PATH|URL>        replace the loaded jobs
  clear                             drop all filters and sort rules
  help                              this text
  quit                              leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Level,
    Type,
    Skill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    File(String),
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Filter {
        field: FilterField,
        value: Option<String>,
    },
    Sort {
        key: SortKey,
        direction: Option<Direction>,
    },
    Precedence(Precedence),
    Show(usize),
    Options,
    Load(LoadTarget),
    Clear,
    Help,
    Quit,
}

/// Parse one input line. Filter values keep inner spaces, and a
/// double-quoted value keeps its leading and trailing spaces too.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "filter" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            let field = match field.to_ascii_lowercase().as_str() {
                "level" => FilterField::Level,
                "type" => FilterField::Type,
                "skill" => FilterField::Skill,
                other => bail!("unknown filter field '{}' (level, type or skill)", other),
            };
            let value = (!value.is_empty()).then(|| unquote(value).to_string());
            Ok(Command::Filter { field, value })
        }
        "sort" => {
            let mut parts = rest.split_whitespace();
            let key = match parts.next().map(str::to_ascii_lowercase).as_deref() {
                Some("title") => SortKey::Title,
                Some("time") => SortKey::Time,
                _ => bail!("usage: sort <title|time> <asc|desc|none>"),
            };
            let direction = match parts.next() {
                None => bail!("usage: sort <title|time> <asc|desc|none>"),
                Some(d) if d.eq_ignore_ascii_case("none") => None,
                Some(d) => Some(d.parse::<Direction>().map_err(|e| anyhow!(e))?),
            };
            Ok(Command::Sort { key, direction })
        }
        "precedence" => Ok(Command::Precedence(
            rest.parse::<Precedence>().map_err(|e| anyhow!(e))?,
        )),
        "show" => {
            let position = rest
                .parse::<usize>()
                .map_err(|_| anyhow!("usage: show <N>"))?;
            Ok(Command::Show(position))
        }
        "options" => Ok(Command::Options),
        "load" => {
            let (kind, target) = rest
                .split_once(char::is_whitespace)
                .map(|(kind, target)| (kind, target.trim()))
                .ok_or_else(|| anyhow!("usage: load <file|url> <PATH|URL>"))?;
            match kind.to_ascii_lowercase().as_str() {
                "file" => Ok(Command::Load(LoadTarget::File(target.to_string()))),
                "url" => Ok(Command::Load(LoadTarget::Url(target.to_string()))),
                _ => bail!("usage: load <file|url> <PATH|URL>"),
            }
        }
        "clear" | "reset" => Ok(Command::Clear),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => bail!("unknown command '{}' (try 'help')", other),
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

pub struct Session {
    board: JobBoard,
    presenter: TablePresenter,
    schema: SchemaChoice,
}

impl Session {
    pub fn new(board: JobBoard, presenter: TablePresenter, schema: SchemaChoice) -> Self {
        Self {
            board,
            presenter,
            schema,
        }
    }

    #[cfg(test)]
    pub fn board(&self) -> &JobBoard {
        &self.board
    }

    /// Load from `source`, report the outcome, render on success
    pub async fn load(&mut self, source: &dyn JobSource) {
        match self.board.load(source, &self.schema).await {
            Ok(count) => {
                output::line(
                    format!("✓ Loaded {} job(s) from {}", count, source.describe())
                        .green()
                        .bold(),
                );
                self.board.render(&self.presenter);
            }
            Err(e) => {
                let prefix = if e.is_load_error() {
                    "Error loading or parsing the job data"
                } else {
                    "Load rejected"
                };
                output::line(format!("{} {}: {}", "✗".red(), prefix, e));
            }
        }
    }

    /// Read commands until EOF or `quit`
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        output::line("Type 'help' for commands.".dimmed());

        loop {
            output::prompt(PROMPT);

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(e) = self.execute(command).await {
                        output::line(format!("{} {}", "✗".red(), e));
                    }
                }
                Err(e) => output::line(format!("{} {}", "✗".red(), e)),
            }
        }

        Ok(())
    }

    /// Apply one command. Errors leave the board unchanged.
    pub async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::List => self.board.render(&self.presenter),
            Command::Filter { field, value } => {
                let mut criteria = self.board.criteria().clone();
                match field {
                    FilterField::Level => criteria.level = value,
                    FilterField::Type => criteria.job_type = value,
                    FilterField::Skill => criteria.skill = value,
                }
                let view = self.board.set_filter(criteria);
                self.presenter.render(&view);
            }
            Command::Sort { key, direction } => {
                let mut order = *self.board.order();
                match key {
                    SortKey::Title => order.title = direction,
                    SortKey::Time => order.time = direction,
                }
                let view = self.board.set_sort(order);
                self.presenter.render(&view);
            }
            Command::Precedence(precedence) => {
                let order = SortOrder {
                    precedence,
                    ..*self.board.order()
                };
                let view = self.board.set_sort(order);
                self.presenter.render(&view);
            }
            Command::Show(position) => {
                self.board.render_detail(&self.presenter, position)?;
            }
            Command::Options => self.presenter.render_options(&self.board.options()),
            Command::Load(LoadTarget::File(path)) => {
                self.load(&FileJobSource::new(&path)).await;
            }
            Command::Load(LoadTarget::Url(url)) => {
                let source = HttpJobSource::new(url)?;
                self.load(&source).await;
            }
            Command::Clear => {
                let view = self.board.clear();
                self.presenter.render(&view);
            }
            Command::Help => output::line(HELP),
            Command::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::port::time_provider::mocks::FixedTimeProvider;
    use std::sync::Arc;

    #[test]
    fn test_parse_filter_keeps_spaces() {
        assert_eq!(
            parse_command("filter skill Web Development").unwrap(),
            Command::Filter {
                field: FilterField::Skill,
                value: Some("Web Development".to_string())
            }
        );
        assert_eq!(
            parse_command("filter level").unwrap(),
            Command::Filter {
                field: FilterField::Level,
                value: None
            }
        );
        assert!(parse_command("filter budget 100").is_err());
    }

    #[test]
    fn test_parse_filter_quoted_value_keeps_edge_spaces() {
        assert_eq!(
            parse_command(r#"filter level " Expert ""#).unwrap(),
            Command::Filter {
                field: FilterField::Level,
                value: Some(" Expert ".to_string())
            }
        );
        // an empty quoted value is an explicit empty selection, i.e. "any"
        assert_eq!(
            parse_command(r#"filter type """#).unwrap(),
            Command::Filter {
                field: FilterField::Type,
                value: Some(String::new())
            }
        );
        // a lone quote is taken literally
        assert_eq!(
            parse_command(r#"filter skill "Rust"#).unwrap(),
            Command::Filter {
                field: FilterField::Skill,
                value: Some("\"Rust".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_quoted_filter_selects_padded_value() {
        use jobboard_core::port::job_source::mocks::StaticJobSource;

        let board = JobBoard::new(Arc::new(FixedTimeProvider::new(0)));
        let mut session = Session::new(board, TablePresenter, SchemaChoice::default());
        let source = StaticJobSource::new(serde_json::json!([
            {"title": "Padded", "posted": "1 hour ago", "type": "Hourly",
             "level": " Expert", "skill": "Rust", "detail": ""},
            {"title": "Plain", "posted": "1 hour ago", "type": "Hourly",
             "level": "Expert", "skill": "Rust", "detail": ""}
        ]));
        session.load(&source).await;

        let command = parse_command(r#"filter level " Expert""#).unwrap();
        session.execute(command).await.unwrap();
        assert_eq!(session.board().current_view().titles(), vec!["Padded"]);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(
            parse_command("sort time DESC").unwrap(),
            Command::Sort {
                key: SortKey::Time,
                direction: Some(Direction::Desc)
            }
        );
        assert_eq!(
            parse_command("sort title none").unwrap(),
            Command::Sort {
                key: SortKey::Title,
                direction: None
            }
        );
        assert!(parse_command("sort title").is_err());
        assert!(parse_command("sort price asc").is_err());
        assert!(parse_command("sort time sideways").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("  show 3 ").unwrap(), Command::Show(3));
        assert!(parse_command("show three").is_err());
        assert_eq!(
            parse_command("precedence title").unwrap(),
            Command::Precedence(Precedence::TitleFirst)
        );
        assert_eq!(
            parse_command("load file ~/Downloads/my jobs.json").unwrap(),
            Command::Load(LoadTarget::File("~/Downloads/my jobs.json".to_string()))
        );
        assert!(parse_command("load ftp x").is_err());
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert!(parse_command("dance").is_err());
    }

    #[tokio::test]
    async fn test_failed_command_keeps_state() {
        let board = JobBoard::new(Arc::new(FixedTimeProvider::new(0)));
        let mut session = Session::new(board, TablePresenter, SchemaChoice::default());

        session
            .execute(Command::Filter {
                field: FilterField::Level,
                value: Some("Expert".to_string()),
            })
            .await
            .unwrap();

        // Nothing loaded: showing fails, the filter stays
        assert!(session.execute(Command::Show(1)).await.is_err());
        assert_eq!(session.board().criteria().level.as_deref(), Some("Expert"));

        // Loading a non-JSON file is rejected, store stays empty
        session
            .execute(Command::Load(LoadTarget::File("/tmp/jobs.txt".to_string())))
            .await
            .unwrap();
        assert!(session.board().is_empty());
    }
}
