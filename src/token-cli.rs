//! A small CLI tool for issuing credentials to a voting server.
//! Tokens are signed with the same code the server verifies them with, so
//! anything minted here is accepted by `POST /auth` or as a bearer token.

use chrono::Duration;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use data_encoding::BASE64;
use rand::RngCore;

use voting_backend::model::{
    auth::AuthToken,
    identity::{Identity, IdentityError},
};

const PROGRAM_NAME: &str = "voting-token";

const ABOUT_TEXT: &str = "Issue credentials for a voting server.

EXIT CODES:
     0: Success.
     1: Error.";

const MINT: &str = "mint";
const SECRET: &str = "secret";

const IDENTITY: &str = "IDENTITY";
const SECRET_ARG: &str = "SECRET";
const TTL: &str = "TTL";
const BYTES: &str = "BYTES";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .subcommand(
            Command::new(MINT)
                .about("Mint a signed token for an identity")
                .arg(
                    Arg::new(IDENTITY)
                        .help("The identity the token authenticates as")
                        .action(ArgAction::Set)
                        .required(true),
                )
                .arg(
                    Arg::new(SECRET_ARG)
                        .long("secret")
                        .help("The server's `jwt_secret`")
                        .action(ArgAction::Set)
                        .required(true),
                )
                .arg(
                    Arg::new(TTL)
                        .long("ttl")
                        .help("Lifetime of the token in seconds")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(u32))
                        .default_value("3600"),
                ),
        )
        .subcommand(
            Command::new(SECRET)
                .about("Generate a random base64 secret suitable for `jwt_secret`")
                .arg(
                    Arg::new(BYTES)
                        .long("bytes")
                        .help("Number of random bytes")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(u16).range(16..))
                        .default_value("32"),
                ),
        )
}

/// Errors that this program may produce.
#[derive(Debug, Eq, PartialEq)]
enum Error {
    /// The identity was not acceptable.
    Identity(String),
    /// Signing failed.
    Signing(String),
}

/// Mint a token for `identity`.
fn mint(identity: &str, secret: &str, ttl: u32) -> Result<String, Error> {
    let identity: Identity = identity
        .parse()
        .map_err(|e: IdentityError| Error::Identity(e.to_string()))?;
    AuthToken::new(identity)
        .encode(secret.as_bytes(), Duration::seconds(ttl.into()))
        .map_err(|e| Error::Signing(e.to_string()))
}

/// Generate `bytes` random bytes, base64-encoded.
fn secret(bytes: u16) -> String {
    let mut buf = vec![0; bytes.into()];
    rand::thread_rng().fill_bytes(&mut buf);
    BASE64.encode(&buf)
}

/// Run the chosen subcommand, report the result, and return the exit code.
fn run(args: &ArgMatches) -> u8 {
    // Defaulted and required arguments are guaranteed to be present.
    match args.subcommand() {
        Some((MINT, args)) => {
            let identity: &String = args.get_one(IDENTITY).unwrap();
            let secret: &String = args.get_one(SECRET_ARG).unwrap();
            let ttl: u32 = *args.get_one(TTL).unwrap();
            match mint(identity, secret, ttl) {
                Ok(token) => {
                    println!("{token}");
                    0
                }
                Err(Error::Identity(msg)) => {
                    println!("Invalid identity: {msg}");
                    1
                }
                Err(Error::Signing(msg)) => {
                    println!("Failed to sign token: {msg}");
                    1
                }
            }
        }
        Some((SECRET, args)) => {
            let bytes: u16 = *args.get_one(BYTES).unwrap();
            println!("{}", secret(bytes));
            0
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn main() {
    let args = cli().get_matches();
    let exit_code = run(&args);
    std::process::exit(exit_code.into())
}
