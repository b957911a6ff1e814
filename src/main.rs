//! court-designer - Design sport-court color schemes from the command line.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use court_core::catalog::color_by_name;
use court_core::config::DEFAULT_ORIGIN;
use court_core::render::legend;
use court_core::taxonomy::{default_color, element_label, elements_for_court, is_valid_element};
use court_core::{
    AppConfig, Color, ContactInfo, ContactMethod, CourtType, DesignError, ElementType, FileStorage,
    Location, MailLauncher, OverlaysPatch, RenderFrame, Renderer, Session, Storage,
};

/// Design basketball, tennis and pickleball court colors and request quotes.
#[derive(Parser, Debug)]
#[command(name = "court-designer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the stored design (defaults to the user data dir)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Location to open, e.g. "/tennis?design=..." (defaults to the last one)
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Quote recipient (overrides COURT_QUOTE_EMAIL)
    #[arg(long, global = true)]
    quote_email: Option<String>,

    /// Output the design state as JSON after the command
    #[arg(long, global = true)]
    debug: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current court design
    Show,
    /// List the elements of the current court
    Elements,
    /// Select an element to color
    SelectElement { element: ElementType },
    /// Color the selected element (or --element)
    SetColor {
        /// Color code (#rrggbb) or catalog name
        #[arg(value_parser = parse_color)]
        color: Color,
        #[arg(short, long)]
        element: Option<ElementType>,
    },
    /// Show or hide hoops/nets on the current court
    Accessories { state: Toggle },
    /// Draw another court's outline over the current one
    Overlay { court: CourtType, state: Toggle },
    /// Clear customizations (keeps the court unless --all)
    Reset {
        /// Also forget the stored design and location
        #[arg(long)]
        all: bool,
    },
    /// Print a shareable link
    Share {
        #[arg(long, default_value = DEFAULT_ORIGIN)]
        origin: String,
    },
    /// Compose a quote request email for the current court
    Quote {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "email")]
        prefer: ContactMethod,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        self == Toggle::On
    }
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    s.parse::<Color>()
        .or_else(|err| match color_by_name(s) {
            Some(option) => Ok(Color::new(option.hex)),
            None => Err(err),
        })
        .map_err(|err| err.to_string())
}

/// Prints each frame's legend to stdout.
struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn draw(&mut self, frame: &RenderFrame) -> court_core::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(legend(frame).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Prints the mailto URI for the user to open.
struct PrintLauncher;

impl MailLauncher for PrintLauncher {
    fn launch(&mut self, uri: &str) -> court_core::Result<()> {
        println!("Open this link in your mail client:");
        println!("{}", uri);
        Ok(())
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("court-designer"))
        .unwrap_or_else(|| PathBuf::from(".court-designer"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::from_env().with_quote_email(args.quote_email.clone());
    let file_storage = FileStorage::new(args.storage.clone().unwrap_or_else(default_storage_dir));
    debug!("Using storage at {}", file_storage.dir().display());
    let storage: Rc<dyn Storage> = Rc::new(file_storage);

    let location = match &args.url {
        Some(url) => Location::parse(url).with_context(|| format!("Failed to open {}", url))?,
        None => Session::last_location(storage.as_ref())
            .unwrap_or_else(|| Location::court(CourtType::Basketball)),
    };
    info!("Opening {}", location);

    let mut session = Session::start(Rc::clone(&storage), location);
    let command = args.command.unwrap_or(Command::Show);
    run(&mut session, command, &config)?;

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(session.state())?;
        println!("{}", json);
    }

    println!("Location: {}", session.location());
    Ok(())
}

fn run(session: &mut Session, command: Command, config: &AppConfig) -> Result<()> {
    let court = session.state().selected_court;

    match command {
        Command::Show => StdoutRenderer.draw(&session.render_frame())?,
        Command::Elements => list_elements(session),
        Command::SelectElement { element } => {
            select(session, court, element)?;
            StdoutRenderer.draw(&session.render_frame())?;
        }
        Command::SetColor { color, element } => {
            if let Some(element) = element {
                select(session, court, element)?;
            }
            if !session.store_mut().set_color(color) {
                bail!("Nothing selected on the {} court", court);
            }
            StdoutRenderer.draw(&session.render_frame())?;
        }
        Command::Accessories { state } => {
            session.store_mut().set_accessories(court, state.enabled());
            StdoutRenderer.draw(&session.render_frame())?;
        }
        Command::Overlay {
            court: overlay,
            state,
        } => {
            if overlay == court {
                info!("A court is never drawn over itself; the overlay is only listed in quotes");
            }
            session
                .store_mut()
                .set_overlays(OverlaysPatch::only(overlay, state.enabled()));
            StdoutRenderer.draw(&session.render_frame())?;
        }
        Command::Reset { all } => {
            if all {
                session.clear().context("Failed to clear stored design")?;
            } else {
                session.store_mut().reset(true);
            }
            StdoutRenderer.draw(&session.render_frame())?;
        }
        Command::Share { origin } => {
            println!("{}", session.share_url(&origin)?);
        }
        Command::Quote {
            email,
            phone,
            prefer,
        } => {
            let contact = ContactInfo::new(email)
                .with_phone(phone)
                .with_preferred(prefer);
            let today = chrono::Local::now().date_naive();
            let request = session.request_quote(contact, config, today, &mut PrintLauncher)?;
            println!();
            println!("Subject: {}", request.subject);
            println!();
            println!("{}", request.body);
        }
    }

    Ok(())
}

fn select(session: &mut Session, court: CourtType, element: ElementType) -> Result<()> {
    if !is_valid_element(court, element) {
        return Err(DesignError::ElementNotOnCourt {
            court: court.to_string(),
            element: element.to_string(),
        }
        .into());
    }
    session.store_mut().select_element(element);
    Ok(())
}

fn list_elements(session: &Session) {
    let state = session.state();
    let court = state.selected_court;
    for &element in elements_for_court(court) {
        let marker = if element == state.selected_element { '*' } else { ' ' };
        let color = session.store().color(court, element);
        let note = if color == default_color(element) { "" } else { " (custom)" };
        println!(
            "{} {:<24} {:<18} {}{}",
            marker,
            element.as_str(),
            element_label(element),
            color,
            note
        );
    }
}
