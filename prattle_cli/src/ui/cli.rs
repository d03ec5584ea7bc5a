use std::io::{stdout, Read, Write};
use std::sync::Arc;

use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, info};
use prattle_core::connection::errors::ConnectionError;
use prattle_core::ui::{Console, PasswordPrompt};
use prattle_core::{AccountProfile, CommandContext, FileAccountStore, TcpTransport, Transport};
use tokio::io::{AsyncBufReadExt, BufReader};

const CONNECT_USAGE: &str = "/connect account|jid [server value] [port value]";
const ACCOUNT_USAGE: &str =
    "/account [list | show name | add jid | enable name | disable name | rename old new]";

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "prattle-rs", version)]
pub struct Args {
    /// Account name or JID to connect to at startup
    #[arg(long)]
    pub connect: Option<String>,
}

/// Console reporter printing to stdout (errors to stderr).
struct StdoutConsole;

impl Console for StdoutConsole {
    fn show(&self, text: &str) {
        println!("{text}");
    }

    fn show_error(&self, text: &str) {
        eprintln!("{text}");
    }

    fn show_account(&self, account: &AccountProfile) {
        println!("{}:", account.name);
        println!("  jid     : {}", account.full_jid());
        if let Some(server) = &account.server {
            println!("  server  : {server}");
        }
        if account.port != 0 {
            println!("  port    : {}", account.port);
        }
        println!("  enabled : {}", if account.enabled { "yes" } else { "no" });
    }

    fn show_account_list(&self, names: &[String]) {
        if names.is_empty() {
            println!("No accounts.");
        }
        for name in names {
            println!("{name}");
        }
    }
}

/// Reads a password from the terminal without echoing it.
struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn ask_password(&self) -> String {
        print!("Password: ");
        let _ = stdout().flush();
        if enable_raw_mode().is_err() {
            // No raw mode (e.g. piped stdin): fall back to an echoed line.
            let mut line = String::new();
            let _ = std::io::stdin().read_line(&mut line);
            return line.trim_end().to_string();
        }
        let mut password = String::new();
        let mut buf = [0u8; 1];
        let mut stdin = std::io::stdin();
        while stdin.read_exact(&mut buf).is_ok() {
            match buf[0] {
                b'\r' | b'\n' => break,
                0x08 | 0x7f => {
                    password.pop();
                }
                byte => password.push(byte as char),
            }
        }
        let _ = disable_raw_mode();
        println!();
        password
    }
}

pub async fn run_cli(args: Args) -> Result<(), ConnectionError> {
    let store = FileAccountStore::new()?;
    let transport = Arc::new(TcpTransport::new());
    let console = StdoutConsole;
    let prompt = TerminalPrompt;
    let ctx = CommandContext::new(&store, transport.as_ref(), &console, &prompt);

    if let Some(target) = &args.connect {
        ctx.cmd_connect(&[target.as_str()], CONNECT_USAGE).await;
        attach_stream_printer(&transport).await;
    }

    info!("Type /help for the command list, /quit to exit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = stdout().flush();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = tokens.split_first() else {
            continue;
        };
        match command.trim_start_matches('/') {
            "connect" => {
                ctx.cmd_connect(rest, CONNECT_USAGE).await;
                attach_stream_printer(&transport).await;
            }
            "account" => {
                ctx.cmd_account(rest, ACCOUNT_USAGE).await;
            }
            "disconnect" => {
                ctx.cmd_disconnect().await;
            }
            "help" => {
                println!("{CONNECT_USAGE}");
                println!("{ACCOUNT_USAGE}");
                println!("/disconnect");
                println!("/quit");
            }
            "quit" | "exit" => break,
            other => println!("Unknown command: /{other}"),
        }
    }

    transport.disconnect().await;
    Ok(())
}

/// Echo raw stream bytes of the current session to the terminal. The task
/// ends on its own once the session's broadcast channel closes.
async fn attach_stream_printer(transport: &Arc<TcpTransport>) {
    let Some(mut rx) = transport.subscribe().await else {
        return;
    };
    tokio::spawn(async move {
        while let Ok(chunk) = rx.recv().await {
            print!("{}", String::from_utf8_lossy(&chunk));
            let _ = stdout().flush();
        }
        debug!("Stream printer task ended.");
    });
}
