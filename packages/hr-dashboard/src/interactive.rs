//! Interactive tab loop for the personal page.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use hr_client::{HrApi, Session};
use hr_dashboard::pages::{PersonalPage, Tab};
use hr_dashboard::render::{personal_view, terminal};

const REFRESH: &str = "🔄 Refresh";
const EXIT: &str = "🛑 Exit";

pub async fn run_personal(page: &mut PersonalPage, api: &dyn HrApi, session: &Session) -> Result<()> {
    let term = Term::stdout();

    if !term.is_term() {
        print!("{}", terminal::paint_personal(&personal_view(page, session)));
        return Ok(());
    }

    loop {
        term.clear_screen()?;
        print!("{}", terminal::paint_personal(&personal_view(page, session)));
        println!();

        let mut options: Vec<&str> = Tab::variants().iter().map(|t| t.label()).collect();
        options.push(REFRESH);
        options.push(EXIT);

        let current = Tab::variants()
            .iter()
            .position(|t| *t == page.active_tab())
            .unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Show")
            .items(&options)
            .default(current)
            .interact_on(&term)?;

        match options[selection] {
            REFRESH => page.refresh(api, session).await,
            EXIT => {
                println!("{}", "👋 Goodbye!".bright_blue());
                break;
            }
            _ => {
                let tab = Tab::variants()[selection];
                page.activate(tab, api, session).await;
            }
        }
    }

    page.unmount();
    Ok(())
}
