pub fn command() -> clap::Command {
    clap::Command::new("blink")
        .bin_name("blink")
        .version(clap::crate_version!())
        .about("Encode commands for a ThingM blink(1)")
        .long_about("Encodes a command as a blink(1) HID report and writes it to STDOUT (e.g. \"blink n red > /dev/hidraw0\"). Logs to STDERR, set RUST_LOG=blink1=debug to see the report being sent")
        .override_usage("blink [OPTIONS] COMMAND [FIELD...]")
        .after_help(commands_help())
        .arg(
            clap::Arg::new("colors")
                .short('c')
                .long("colors")
                .help("List defined colors")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            clap::Arg::new("command")
                .value_name("COMMAND")
                .help("The command letter (see Commands below)")
        )
        .arg(
            clap::Arg::new("fields")
                .value_name("FIELD")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("The command's fields (see \"blink COMMAND\" for usage)")
        )
}

/// The table of commands, shown after the options.
pub fn commands_help() -> String {
    let mut help = String::from("Commands:");
    for command in blink1::Command::ALL {
        help.push_str(&format!("\n  {command}  {}", command.description()));
    }
    help
}

#[cfg(test)]
mod tests {
    #[test]
    fn verify_command() {
        super::command().debug_assert();
    }

    #[test]
    fn commands_help() {
        assert_eq!(
            super::commands_help(),
            indoc::indoc!{"
                Commands:
                  c  Fade to RGB color
                  D  Serverdown tickle/off
                  n  Set RGB color now
                  p  Play/Pause
                  P  Set pattern entry"
            }
        );
    }

    #[test]
    fn help_lists_commands() {
        let help = super::command().render_help().to_string();
        assert!(help.contains("Usage: blink [OPTIONS] COMMAND [FIELD...]"), "{help}");
        assert!(help.contains("-c, --colors"), "{help}");
        assert!(help.contains(&super::commands_help()), "{help}");
    }
}
