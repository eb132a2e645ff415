use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hr_client::HrClient;
use hr_dashboard::pages::{EmployeeHistoryPage, HomePage, PersonalPage, ProfilePage, Tab};
use hr_dashboard::render::{self, terminal};
use hr_dashboard::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod interactive;

#[derive(Parser)]
#[command(name = "hr-dashboard", about = "Terminal console for the HR dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Today's attendance
    Home,
    /// Employee details; interactive tabs when attached to a terminal
    Personal {
        /// Employee to show (defaults to the signed-in employee)
        #[arg(long)]
        id: Option<String>,
        /// Print one tab and exit
        #[arg(long, value_enum)]
        tab: Option<TabArg>,
    },
    /// Change history for one employee
    History { id: String },
    /// The signed-in user
    Profile,
}

#[derive(Clone, Copy, ValueEnum)]
enum TabArg {
    Personal,
    History,
    Emergency,
    Bank,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Personal => Tab::Personal,
            TabArg::History => Tab::History,
            TabArg::Emergency => Tab::Emergency,
            TabArg::Bank => Tab::Bank,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so screens stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,hr_dashboard=info,hr_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let api = HrClient::new(&config.api_base_url).with_http_client(http);
    let session = config.session;

    match cli.command {
        Command::Home => {
            let mut page = HomePage::new();
            page.mount(&api, &session).await;
            print!(
                "{}",
                terminal::paint_attendance(&render::attendance_view(page.attendance()))
            );
        }
        Command::Personal { id, tab } => {
            let mut page = PersonalPage::new(id);
            page.mount(&api, &session).await;
            match tab {
                Some(tab) => {
                    page.activate(tab.into(), &api, &session).await;
                    print!(
                        "{}",
                        terminal::paint_personal(&render::personal_view(&page, &session))
                    );
                }
                None => interactive::run_personal(&mut page, &api, &session).await?,
            }
        }
        Command::History { id } => {
            let mut page = EmployeeHistoryPage::new(id);
            page.mount(&api, &session).await;
            print!(
                "{}",
                terminal::paint_history(&render::history_view(page.history()))
            );
        }
        Command::Profile => {
            let page = ProfilePage::from_session(&session);
            print!("{}", terminal::paint_profile(&render::profile_view(&page)));
        }
    }

    Ok(())
}
