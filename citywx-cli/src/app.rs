//! Interactive search session: a menu loop over search, recent-entry
//! re-fetch, and the unit toggle, re-rendering after every action.

use anyhow::{Context, Result};
use citywx_core::{
    Config, SearchController, SearchTicket, TemperatureUnit, WeatherApiProvider, WeatherReport,
};
use inquire::{Select, Text};
use std::fmt;

/// One selectable menu entry.
#[derive(Debug, Clone)]
enum Action {
    Search,
    Recent(String),
    /// Carries the unit the toggle would switch TO, which is also the label.
    Toggle(TemperatureUnit),
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Search => f.write_str("Search for a city"),
            Action::Recent(city) => write!(f, "Again: {city}"),
            Action::Toggle(target) => write!(f, "Toggle to {target}"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Interactive session state: the search controller plus the unit
/// preference, which lives for the session and is handed to rendering
/// rather than being global.
pub struct Session {
    controller: SearchController,
    unit: TemperatureUnit,
    provider: WeatherApiProvider,
}

impl Session {
    pub fn start() -> Result<Self> {
        let config = Config::load()?;
        let provider = WeatherApiProvider::new(config.require_api_key()?.to_owned());

        Ok(Self {
            controller: SearchController::new(),
            unit: config.default_unit,
            provider,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        println!("citywx — current weather lookup (Esc to leave)");

        loop {
            match self.prompt()? {
                Some(Action::Search) => {
                    let input = Text::new("City name:")
                        .prompt_skippable()
                        .context("Failed to read city name")?;
                    let Some(input) = input else { continue };

                    self.controller.set_input(input);
                    if let Some(ticket) = self.controller.submit() {
                        self.fetch(ticket).await;
                    }
                }
                Some(Action::Recent(city)) => {
                    let ticket = self.controller.dispatch(city);
                    self.fetch(ticket).await;
                }
                Some(Action::Toggle(_)) => {
                    self.unit.toggle();
                    self.render();
                }
                Some(Action::Quit) | None => break,
            }
        }

        Ok(())
    }

    fn prompt(&self) -> Result<Option<Action>> {
        let mut options = vec![Action::Search];
        for city in self.controller.history().entries() {
            options.push(Action::Recent(city.clone()));
        }
        options.push(Action::Toggle(self.unit.toggled()));
        options.push(Action::Quit);

        Select::new("What next?", options)
            .prompt_skippable()
            .context("Failed to read menu selection")
    }

    async fn fetch(&mut self, ticket: SearchTicket) {
        println!("Loading...");
        self.controller.run(&self.provider, ticket).await;
        self.render();
    }

    fn render(&self) {
        if let Some(message) = self.controller.error() {
            println!("{message}");
        }
        if let Some(report) = self.controller.report() {
            print!("{}", render_report(report, self.unit));
        }
    }
}

/// Weather summary under the given display unit. The report keeps the
/// provider's Celsius value; conversion happens here at render time.
pub fn render_report(report: &WeatherReport, unit: TemperatureUnit) -> String {
    format!(
        "{}, {}, {}\nTemperature: {}°{}\nCondition: {}\nObserved: {}\n",
        report.location.name,
        report.location.region,
        report.location.country,
        unit.convert(report.temp_c),
        unit.symbol(),
        report.condition,
        report.observed_at.format("%Y-%m-%d %H:%M UTC"),
    )
}
