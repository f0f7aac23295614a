#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, interactive_fleet, place_fleet, print_session_view, random_fleet,
    CliGunner, LineTransport, Role, SessionNode, TurnState, DEFAULT_PORT,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "std")]
#[derive(clap::Subcommand)]
enum Commands {
    /// Host a game and wait for an opponent to connect.
    Host {
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(long, help = "Scatter the fleet randomly instead of prompting")]
        random_fleet: bool,
        #[arg(long, help = "Fix RNG seed for reproducible placement")]
        seed: Option<u64>,
    },
    /// Join a hosted game.
    Join {
        address: String,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(long, help = "Scatter the fleet randomly instead of prompting")]
        random_fleet: bool,
        #[arg(long, help = "Fix RNG seed for reproducible placement")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (role, transport, random, seed) = match cli.command {
        Commands::Host {
            port,
            random_fleet,
            seed,
        } => {
            println!("Waiting for an opponent on port {}...", port);
            let transport = match LineTransport::listen(port).await {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Could not open the session: {}", e);
                    return Ok(());
                }
            };
            (Role::Initiator, transport, random_fleet, seed)
        }
        Commands::Join {
            address,
            port,
            random_fleet,
            seed,
        } => {
            let transport = match LineTransport::connect(&address, port).await {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Could not reach {}:{}: {}", address, port, e);
                    return Ok(());
                }
            };
            (Role::Responder, transport, random_fleet, seed)
        }
    };
    println!("Connected!");

    let mut rng = make_rng(seed);
    let mut node = SessionNode::new(Box::new(CliGunner::new()), Box::new(transport));
    if let Err(e) = node.link_ready().await {
        eprintln!("Session ended: {}", e);
        return Ok(());
    }

    let ships = if random {
        random_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?
    } else {
        interactive_fleet(&mut rng)?
    };
    let board = place_fleet(&ships).map_err(|e| anyhow::anyhow!(e))?;

    match node.play(role, board).await {
        Ok(session) => {
            println!("\n=== GAME OVER ===\n");
            print_session_view(&session);
            match session.state() {
                TurnState::GameWon => println!("\nYou win! All enemy ships are sunk."),
                TurnState::GameLost => println!("\nYou lost. Your fleet is gone."),
                TurnState::Disconnected => println!("\nThe opponent quit the game."),
                _ => {}
            }
        }
        // a failed handshake or corrupted transfer still exits cleanly
        Err(e) => eprintln!("Session ended: {}", e),
    }
    Ok(())
}
