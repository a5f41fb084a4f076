use aceoracle::Probability;
use aceoracle::advice::Advice;
use aceoracle::cards::board::Board;
use aceoracle::cards::hand::Hand;
use aceoracle::cards::hole::Hole;
use aceoracle::equity::river::River;
use aceoracle::equity::showdown::Showdown;
use clap::Parser;
use colored::Colorize;

/// Exact river equity against a single unknown opponent.
#[derive(Parser)]
#[command(name = "aceoracle", version, about)]
struct Args {
    /// Your two hole cards, e.g. "Ah Ad"
    #[arg(long)]
    hole: Option<String>,
    /// The five community cards, e.g. "Ac As 2h 3d 4c"
    #[arg(long)]
    board: Option<String>,
    /// Emit the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Report {
    hole: String,
    board: String,
    best: String,
    #[serde(flatten)]
    showdown: Showdown,
    equity: Probability,
    advice: Advice,
}

fn main() -> anyhow::Result<()> {
    aceoracle::log();
    let args = Args::parse();
    let hole = Hole::try_from(cards(args.hole, "your 2 hole cards", 2)?)?;
    let board = Board::try_from(cards(args.board, "the 5 board cards", 5)?)?;
    anyhow::ensure!(
        !Hand::from(hole).intersects(&Hand::from(board)),
        "hole and board share a card"
    );
    let river = River::from((hole, board));
    log::info!("{:<24}{}", "evaluating", river);
    let clock = std::time::Instant::now();
    let showdown = river.showdown();
    let equity = showdown.equity();
    let advice = Advice::from(equity);
    log::info!("{:<24}{:?}", "990 showdowns in", clock.elapsed());
    match args.json {
        true => {
            let report = Report {
                hole: river.hole().to_string(),
                board: river.board().to_string(),
                best: river.hero().to_string(),
                showdown,
                equity,
                advice,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        false => {
            println!("{:<16}{}", "hole", river.hole());
            println!("{:<16}{}", "board", river.board());
            println!("{:<16}{}", "best hand", river.hero());
            println!("{:<16}{}", "showdown", showdown);
            println!("{:<16}{:.2}%", "equity", equity * 100.0);
            let advice = match advice {
                Advice::Raise => "Raise".green().bold(),
                Advice::Call => "Call".yellow().bold(),
                Advice::Fold => "Fold".red().bold(),
            };
            println!("{:<16}{}", "suggestion", advice);
        }
    }
    Ok(())
}

/// Resolve a card list from the flag if given, else prompt for it.
/// This is the validation edge: token shape, count, and duplicate
/// rejection all happen here, before the engine sees anything.
fn cards(arg: Option<String>, prompt: &str, n: usize) -> anyhow::Result<Hand> {
    let text = match arg {
        Some(text) => text,
        None => dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), String> {
                match Hand::try_from(input.as_str()) {
                    Ok(hand) if hand.size() == n => Ok(()),
                    Ok(hand) => Err(format!(
                        "expected {} distinct cards, found {}",
                        n,
                        hand.size()
                    )),
                    Err(e) => Err(e.to_string()),
                }
            })
            .interact_text()?,
    };
    let hand = Hand::try_from(text.as_str())?;
    anyhow::ensure!(
        hand.size() == n,
        "expected {} distinct cards, found {}",
        n,
        hand.size()
    );
    Ok(hand)
}
