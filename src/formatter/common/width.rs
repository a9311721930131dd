use crossterm::terminal;

/// Column count used when no terminal is attached.
pub const DEFAULT_WIDTH: usize = 80;

/// Where the reporter gets the terminal width from.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum WidthSetting {
    /// Ask the terminal on every render, so resizing mid run is picked up.
    #[default]
    Automatic,
    Fixed(usize),
}

impl WidthSetting {
    pub fn columns(&self) -> usize {
        match self {
            WidthSetting::Automatic => match terminal::size() {
                Ok((columns, _)) if columns > 0 => columns.into(),
                _ => DEFAULT_WIDTH,
            },
            WidthSetting::Fixed(columns) => *columns,
        }
    }
}
