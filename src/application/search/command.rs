/// Prefix marking an input line as a view command rather than model text
const COMMAND_PREFIX: char = ':';

/// Immediate view actions available next to the model search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Free-text code search; a blank term resets to the selected model's rows
    FilterCode(String),
    /// Drops selection, searches and detail; shows every row
    Clear,
    /// Drops the selection only
    Deselect,
}

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchLine {
    Model(String),
    Command(ViewCommand),
    Unknown(String),
}

impl SearchLine {
    /// `:code <term>`, `:clear` and `:deselect` are commands; anything else is model text
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.trim_start().strip_prefix(COMMAND_PREFIX) else {
            return SearchLine::Model(line.to_string());
        };

        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument),
            None => (rest.trim_end(), ""),
        };

        match name {
            "code" => SearchLine::Command(ViewCommand::FilterCode(argument.trim().to_string())),
            "clear" => SearchLine::Command(ViewCommand::Clear),
            "deselect" => SearchLine::Command(ViewCommand::Deselect),
            _ => SearchLine::Unknown(name.to_string()),
        }
    }
}
