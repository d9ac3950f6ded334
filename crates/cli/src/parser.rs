use thiserror::Error;

use filters::{FileType, NamePattern, SearchCriteria};

/// Fatal argument-parsing failures.
///
/// Every variant terminates the process with status 1 before any traversal
/// begins; the [`Reporter`](crate::Reporter) decides which variants are
/// followed by the usage text.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CliError {
    /// Bad arity or no start path; only the usage text is shown.
    #[error("invalid command line syntax")]
    Syntax,
    /// A path token appeared after options had started.
    #[error("paths must precede expression: {0}")]
    PathAfterOptions(String),
    /// A recognised option arrived without its value token.
    #[error("missing argument to `{0}'")]
    MissingArgument(String),
    /// A recognised option was supplied twice.
    #[error("option already declared: `{0}'")]
    AlreadyDeclared(String),
    /// A flag other than `-name` or `-type`.
    #[error("unknown predicate `{0}'")]
    UnknownPredicate(String),
    /// A `-type` value outside the supported character codes.
    #[error("Unknown argument to -type: {0}")]
    UnknownType(char),
}

/// Result of a successful parse: the start path plus compiled criteria.
#[derive(Debug, Eq, PartialEq)]
pub struct ParsedInvocation {
    /// The first non-option argument, used as the traversal root.
    pub start_path: String,
    /// The compiled name/type criteria.
    pub criteria: SearchCriteria,
}

/// Builder state threaded through each parsing step.
///
/// Presence of a field doubles as its "already declared" bit; the state is
/// frozen into a [`ParsedInvocation`] only once the whole vector has been
/// consumed.
#[derive(Debug, Default)]
struct ParseState {
    path: Option<String>,
    name: Option<String>,
    file_type: Option<FileType>,
}

impl ParseState {
    fn apply_option(&mut self, option: &str, value: Option<&str>) -> Result<(), CliError> {
        match option {
            "-name" => {
                let Some(value) = value else {
                    return Err(CliError::MissingArgument(option.to_string()));
                };
                if self.name.is_some() {
                    return Err(CliError::AlreadyDeclared(option.to_string()));
                }
                self.name = Some(value.to_string());
                Ok(())
            }
            "-type" => {
                let Some(value) = value else {
                    return Err(CliError::MissingArgument(option.to_string()));
                };
                if self.file_type.is_some() {
                    return Err(CliError::AlreadyDeclared(option.to_string()));
                }
                let code = value.chars().next().unwrap_or('\0');
                let file_type =
                    FileType::from_code(code).map_err(|error| CliError::UnknownType(error.code))?;
                self.file_type = Some(file_type);
                Ok(())
            }
            other => Err(CliError::UnknownPredicate(other.to_string())),
        }
    }

    fn finish(self) -> Result<ParsedInvocation, CliError> {
        let Some(start_path) = self.path else {
            return Err(CliError::Syntax);
        };
        let criteria = SearchCriteria::new(
            self.name.as_deref().map(NamePattern::new),
            self.file_type,
        );
        Ok(ParsedInvocation {
            start_path,
            criteria,
        })
    }
}

/// Interprets the argument vector, program name excluded.
///
/// The first token not beginning with `-` becomes the start path; every
/// token after it must be a recognised option followed by its value. Option
/// values are consumed blindly, even when they look like further options.
/// When options arrive before any path, they are consumed first and the
/// stray trailing path is rejected with the ordering diagnostic.
pub fn parse_invocation(args: &[String]) -> Result<ParsedInvocation, CliError> {
    // One path plus two tokens each for `-name` and `-type`.
    if args.len() > 5 {
        return Err(CliError::Syntax);
    }

    let mut state = ParseState::default();
    let mut index = 0;
    while index < args.len() {
        if state.path.is_none() {
            if args[index].starts_with('-') {
                while index < args.len() && args[index].starts_with('-') {
                    let value = args.get(index + 1).map(String::as_str);
                    state.apply_option(&args[index], value)?;
                    index += 2;
                }
                return match args.get(index) {
                    Some(stray) => Err(CliError::PathAfterOptions(stray.clone())),
                    None => Err(CliError::Syntax),
                };
            }
            state.path = Some(args[index].clone());
            index += 1;
        } else {
            let value = args.get(index + 1).map(String::as_str);
            state.apply_option(&args[index], value)?;
            index += 2;
        }
    }

    state.finish()
}
