use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use palace_center::{
    Catalog, CenterPalace, ChartDocument, Language, NavState, PanelView, Scope, date::parse_date,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "palace-center", about = "Print the center palace of a Zi Wei Dou Shu chart")]
struct Cli {
    /// Chart document: JSON object with `astrolabe` and `horoscope` members
    #[arg(long)]
    chart: Option<PathBuf>,
    /// Display language (zh-CN, zh-TW, ko-KR, ja-JP, en-US, vi-VN)
    #[arg(long, default_value = "zh-CN")]
    lang: Language,
    /// Horoscope date (Y-M-D); today when omitted
    #[arg(long)]
    date: Option<String>,
    /// Horoscope hour slot, 0 (early rat) through 11 (pig)
    #[arg(long, default_value_t = 0)]
    hour: u8,
    /// Extra message catalog, merged over the bundled one; repeatable
    #[arg(long)]
    catalog: Vec<PathBuf>,
    /// Navigation step SCOPE:N, e.g. `daily:-1` or `decadal:10`; repeatable,
    /// applied in order
    #[arg(long = "step", value_parser = parse_step)]
    steps: Vec<(Scope, i32)>,
}

fn parse_step(s: &str) -> Result<(Scope, i32), String> {
    let (scope, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SCOPE:N, got {s:?}"))?;
    let scope = scope.parse::<Scope>().map_err(|e| e.to_string())?;
    let value = value.parse::<i32>().map_err(|e| e.to_string())?;
    Ok((scope, value))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut catalog = Catalog::builtin();
    for path in &cli.catalog {
        let extra =
            Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?;
        catalog.merge(extra);
    }

    let document = match &cli.chart {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading chart {}", path.display()))?;
            serde_json::from_str::<ChartDocument>(&text)
                .with_context(|| format!("parsing chart {}", path.display()))?
        }
        None => ChartDocument::default(),
    };

    let mut state = match &cli.date {
        Some(date) => NavState::new(parse_date(date)?, cli.hour)?,
        None => NavState::new(NavState::now().date(), cli.hour)?,
    };

    for &(scope, value) in &cli.steps {
        let palace = CenterPalace {
            astrolabe: document.astrolabe.as_ref(),
            ..CenterPalace::new(&catalog, cli.lang, state)
        };
        if !palace.click(scope, value, &mut state) {
            if palace.birth_date().is_none() {
                bail!("cannot step without a birth date in the chart");
            }
            tracing::info!(scope = scope.name(), value, "step rejected, before birth date");
        }
    }

    let palace = CenterPalace {
        astrolabe: document.astrolabe.as_ref(),
        horoscope: document.horoscope.as_ref(),
        catalog: &catalog,
        lang: cli.lang,
        state,
    };
    print!("{}", render(&palace.view()));
    Ok(())
}

fn render(view: &PanelView) -> String {
    let mut out = format!("{} {}\n", view.gender_symbol, view.basic_info_title);
    for record in &view.records {
        out += &format!("  {}: {}\n", record.title, record.content);
    }
    let horoscope = &view.horoscope;
    out += &format!("{}\n", view.horoscope_info_title);
    out += &format!("  {}: {}\n", horoscope.lunar_title, horoscope.lunar);
    out += &format!("  {}: {} [{}]\n", horoscope.solar_title, horoscope.solar, horoscope.now_label);

    let captions: Vec<_> = view
        .buttons
        .iter()
        .map(|b| {
            if b.disabled {
                format!("({})", b.caption())
            } else {
                b.caption()
            }
        })
        .collect();
    let (back, forward) = captions.split_at(captions.len() / 2);
    out += &format!("  {} {} {}\n", back.join(" "), view.hour_label, forward.join(" "));
    out
}
