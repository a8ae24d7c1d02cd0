//! Line-oriented version of the calculator form.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use bmi_guide_domain::{BmiForm, BmiServiceTrait, CalculateOutcome, Gender};
use thiserror::Error;
use tracing::debug;

use crate::render;

pub const HELP: &str = "\
Commands:
  weight <kg>       set the weight field
  height <cm>       set the height field
  gender <m|f>      set the gender selector
  calculate         validate and calculate
  reset             clear every field and message
  show              print the current fields
  help              print this list
  quit              leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Weight(String),
    Height(String),
    Gender(Gender),
    Calculate,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error(transparent)]
    Gender(#[from] bmi_guide_domain::entities::ChoiceParseError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "weight" | "w" => Ok(Command::Weight(rest.to_string())),
            "height" | "h" => Ok(Command::Height(rest.to_string())),
            "gender" | "g" => Ok(Command::Gender(rest.parse()?)),
            "calculate" | "calc" | "c" => Ok(Command::Calculate),
            "reset" | "r" => Ok(Command::Reset),
            "show" | "s" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

/// Drive the form from `input` until `quit` or end of input
pub fn run_session<S, R, W>(form: &mut BmiForm<S>, input: R, output: &mut W) -> io::Result<()>
where
    S: BmiServiceTrait,
    R: BufRead,
    W: Write,
{
    writeln!(output, "BMI Calculator ({} mode). Type 'help' for commands.", form.mode())?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Form command");

        match command {
            Command::Weight(value) => form.set_weight(value),
            Command::Height(value) => form.set_height(value),
            Command::Gender(gender) => form.set_gender(gender),
            Command::Calculate => {
                if form.calculate() != CalculateOutcome::Skipped {
                    write!(output, "{}", render::render_output(form))?;
                }
            }
            Command::Reset => {
                form.reset();
                writeln!(output, "Form cleared.")?;
            }
            Command::Show => {
                write!(output, "{}", render::render_fields(form))?;
                write!(output, "{}", render::render_output(form))?;
            }
            Command::Help => write!(output, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_guide_domain::ValidationMode;
    use std::io::Cursor;

    fn run(mode: ValidationMode, script: &str) -> (BmiForm, String) {
        let mut form = BmiForm::with_mode(mode);
        let mut output = Vec::new();
        run_session(&mut form, Cursor::new(script), &mut output).unwrap();
        (form, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("weight 70".parse::<Command>(), Ok(Command::Weight("70".to_string())));
        assert_eq!("H  175.5 ".parse::<Command>(), Ok(Command::Height("175.5".to_string())));
        assert_eq!("weight".parse::<Command>(), Ok(Command::Weight(String::new())));
        assert_eq!("gender f".parse::<Command>(), Ok(Command::Gender(Gender::Female)));
        assert_eq!("CALC".parse::<Command>(), Ok(Command::Calculate));
        assert!(matches!("gender x".parse::<Command>(), Err(CommandError::Gender(_))));
        assert!(matches!("jump".parse::<Command>(), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn test_calculate_then_reset() {
        let (form, out) = run(
            ValidationMode::Extended,
            "weight 70\nheight 175\ncalculate\nreset\nquit\nweight 1\n",
        );

        assert!(out.contains("Your BMI: 22.9"));
        assert!(out.contains("BMI Category: Normal weight"));
        assert!(out.contains("Form cleared."));
        assert!(form.is_cleared());
    }

    #[test]
    fn test_validation_error_is_printed() {
        let (form, out) = run(ValidationMode::Extended, "weight 600\nheight 175\ncalculate\n");
        assert!(out.contains("Error: Please enter realistic values"));
        assert!(form.report().is_none());
    }

    #[test]
    fn test_basic_mode_is_silent_on_missing_input() {
        let (_, out) = run(ValidationMode::Basic, "height 175\ncalculate\n");
        assert!(!out.contains("Error"));
        assert!(!out.contains("Your BMI"));
    }

    #[test]
    fn test_unknown_command_keeps_going() {
        let (form, out) = run(ValidationMode::Extended, "dance\nweight 80\n");
        assert!(out.contains("Unknown command 'dance'"));
        assert_eq!(form.weight(), "80");
    }
}
