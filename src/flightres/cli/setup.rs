use clap::{ArgAction, Args, Parser, Subcommand};
use flightres::model::{Gender, ReservationId};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flightres", bin_name = "flightres", version)]
#[command(about = "Local flight reservations manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding reservations.json and config.json
    #[arg(
        long,
        global = true,
        env = "FLIGHTRES_HOME",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// Reservation fields given on the command line. Absent flags leave the
/// form value as it is (empty for `reserve`, the stored value for `edit`).
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Passenger name
    #[arg(long)]
    pub name: Option<String>,

    /// male or female
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Passport number
    #[arg(long)]
    pub passport: Option<String>,

    /// Destination city (must be one of `flightres destinations`)
    #[arg(long)]
    pub destination: Option<String>,

    /// Departure date and time
    #[arg(long, value_name = "YYYY-MM-DD HH:MM:SS")]
    pub departure: Option<String>,

    /// Arrival date and time
    #[arg(long, value_name = "YYYY-MM-DD HH:MM:SS")]
    pub arrival: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive reservation screens (default)
    #[command(display_order = 1)]
    Ui,

    /// Reserve a ticket
    #[command(alias = "r", display_order = 2)]
    Reserve {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List reservations, newest first
    #[command(alias = "ls", display_order = 3)]
    List,

    /// List the destinations a reservation can use
    #[command(display_order = 4)]
    Destinations,

    /// Change fields of a reservation
    #[command(alias = "e", display_order = 5)]
    Edit {
        /// Reservation id
        id: ReservationId,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a reservation
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Reservation id
        id: ReservationId,
    },

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (e.g., temporal-rules)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and seed destinations
    #[command(display_order = 8)]
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["flightres"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn reserve_parses_fields() {
        let cli = Cli::try_parse_from([
            "flightres",
            "-vv",
            "reserve",
            "--name",
            "Robert Warren",
            "--gender",
            "male",
            "--departure",
            "2022-10-20 21:07:54",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Reserve { fields }) => {
                assert_eq!(fields.name.as_deref(), Some("Robert Warren"));
                assert_eq!(fields.gender, Some(Gender::Male));
                assert_eq!(fields.departure.as_deref(), Some("2022-10-20 21:07:54"));
                assert!(fields.destination.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn bad_gender_is_a_parse_error() {
        assert!(Cli::try_parse_from(["flightres", "reserve", "--gender", "x"]).is_err());
    }

    #[test]
    fn edit_takes_id_and_overrides() {
        let cli =
            Cli::try_parse_from(["flightres", "edit", "4", "--destination", "Paris"]).unwrap();
        match cli.command {
            Some(Commands::Edit { id, fields }) => {
                assert_eq!(id, 4);
                assert_eq!(fields.destination.as_deref(), Some("Paris"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
