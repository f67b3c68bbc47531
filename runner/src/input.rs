use snake_common::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Start,
    Reset,
    Quit,
    Turn(Direction),
}

/// Maps one line of user input to a command. Keys follow the usual `w/a/s/d` layout,
/// arrow key names are accepted too.
pub fn parse_command(line: &str) -> Option<InputCommand> {
    let key = line.trim().to_lowercase();
    let command = match key.as_str() {
        "start" | "enter" => InputCommand::Start,
        "reset" | "r" => InputCommand::Reset,
        "quit" | "exit" | "q" => InputCommand::Quit,
        _ => InputCommand::Turn(parse_direction(&key)?),
    };
    Some(command)
}

pub fn parse_direction(key: &str) -> Option<Direction> {
    match key {
        "w" | "up" | "arrowup" => Some(Direction::Up),
        "s" | "down" | "arrowdown" => Some(Direction::Down),
        "a" | "left" | "arrowleft" => Some(Direction::Left),
        "d" | "right" | "arrowright" => Some(Direction::Right),
        _ => None,
    }
}
