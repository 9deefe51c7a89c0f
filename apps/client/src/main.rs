//! Terminal Hearts: one human seat driven from stdin, robots elsewhere.

use std::io::Write;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use hearts_client::agents::{Choice, HumanAgent, Selection};
use hearts_client::ai::{Lowball, RandomPlayer};
use hearts_client::domain::cards_parsing::format_cards;
use hearts_client::domain::scoring::leader_by_lowest;
use hearts_client::domain::{Card, Position, ScoreLog};
use hearts_client::telemetry::init_tracing;
use hearts_client::{ClientError, RenderUpdate, Renderer, TableConfig, TableView};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Notify;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "hearts")]
#[command(about = "Play Hearts against robots in the terminal")]
struct Args {
    /// Your name at the table
    #[arg(long)]
    name: Option<String>,

    /// Strategy for every robot seat
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Deal seed (for reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Game ends once any total reaches this
    #[arg(long)]
    target_score: Option<i16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum StrategyKind {
    Lowball,
    Random,
}

impl StrategyKind {
    fn name(&self) -> &'static str {
        match self {
            StrategyKind::Lowball => Lowball::NAME,
            StrategyKind::Random => RandomPlayer::NAME,
        }
    }
}

/// Prints table updates as plain lines.
struct TerminalRenderer {
    game_over: Arc<Notify>,
}

impl Renderer for TerminalRenderer {
    fn render(&self, update: &RenderUpdate) {
        match update {
            RenderUpdate::Phase { label } => println!("== {label}"),
            RenderUpdate::PassPrompt { text: Some(text) } => {
                println!("{text}: type a card to select it, then `pass`")
            }
            RenderUpdate::PassPrompt { text: None } => {}
            RenderUpdate::Hand {
                cards,
                face_up: true,
                ..
            } => println!("Your hand: {}", format_cards(cards)),
            RenderUpdate::Hand { .. } => {}
            RenderUpdate::TrickCleared => println!("-- new trick"),
            RenderUpdate::CardPlayed { name, card, .. } => println!("   {name} plays {card}"),
            RenderUpdate::TrickCollected { message, .. } => println!("{message}"),
            RenderUpdate::RoundScored { message, scores } => {
                if let Some(message) = message {
                    println!("*** {message}");
                }
                print!("{scores}");
            }
            RenderUpdate::GameOver {
                message, scores, ..
            } => {
                print!("{scores}");
                println!("{message}");
                self.game_over.notify_one();
            }
        }
        let _ = std::io::stdout().flush();
    }
}

#[derive(Serialize)]
struct PlayerSummary {
    position: Position,
    name: String,
    total: i16,
}

#[derive(Serialize)]
struct GameSummary {
    winner: Option<Position>,
    players: Vec<PlayerSummary>,
    rounds: ScoreLog,
}

fn summarize(table: &TableView) -> GameSummary {
    let model = table.model();
    let totals = model.scores();
    let complete = model.state() == hearts_client::GamePhase::Complete;
    GameSummary {
        winner: complete.then(|| leader_by_lowest(totals)),
        players: Position::ALL
            .into_iter()
            .map(|p| PlayerSummary {
                position: p,
                name: model.player_name(p),
                total: totals[p.index()],
            })
            .collect(),
        rounds: model.score_log(),
    }
}

fn show_hand(human: &HumanAgent, table: &TableView) {
    let hand = table.model().hand(human.position());
    println!("Your hand: {}", format_cards(&hand));
    match table.model().state() {
        hearts_client::GamePhase::Passing => {
            println!("Selected: {}", format_cards(&human.selection()))
        }
        hearts_client::GamePhase::Playing => {
            println!("Playable: {}", format_cards(&human.legal_cards()))
        }
        _ => {}
    }
}

async fn handle_card(human: &HumanAgent, card: Card) -> Result<(), ClientError> {
    match human.choose(card).await? {
        Choice::Pass(Selection::Added) => println!("selected {card}"),
        Choice::Pass(Selection::Removed) => println!("deselected {card}"),
        Choice::Pass(Selection::Full) => println!("already holding 3 cards; deselect one first"),
        Choice::Played => {}
    }
    if human.ready_to_pass() {
        println!("three cards selected; type `pass` to send them");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = TableConfig::from_env()?;
    if let Some(name) = args.name {
        config.player_name = name;
    }
    if let Some(strategy) = &args.strategy {
        config.robot_strategy = strategy.name().to_string();
    }
    if let Some(seed) = args.seed {
        config.rules.seed = Some(seed);
    }
    if let Some(target) = args.target_score {
        config.rules.target_score = target;
    }

    let game_over = Arc::new(Notify::new());
    let renderer = Arc::new(TerminalRenderer {
        game_over: Arc::clone(&game_over),
    });
    let table = TableView::start(&config, renderer)?;
    let human = table
        .human()
        .ok_or_else(|| ClientError::runtime("no human seat at the table"))?;
    info!(position = %human.position(), "you are seated");
    println!("Commands: <card> (e.g. QS) to select/play, pass, hand, refresh, quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = game_over.notified() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = line.trim();
                let outcome = match command.to_ascii_lowercase().as_str() {
                    "" => Ok(()),
                    "quit" | "q" | "exit" => break,
                    "hand" | "h" => {
                        show_hand(human, &table);
                        Ok(())
                    }
                    "refresh" | "r" => {
                        table.refresh();
                        Ok(())
                    }
                    "pass" | "p" => human
                        .submit_pass()
                        .await
                        .map(|cards| println!("passed {}", format_cards(&cards))),
                    token => match token.parse::<Card>() {
                        Ok(card) => handle_card(human, card).await,
                        Err(e) => Err(e.into()),
                    },
                };
                if let Err(err) = outcome {
                    if !err.is_rejection() {
                        warn!(error = %err, "command failed");
                    }
                    println!("! {err}");
                }
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&summarize(&table))?);
    Ok(())
}
