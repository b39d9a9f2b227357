use std::env;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use formats::{Document, spaces_to_tsv, to_feature_collection};
use model::Coords;
use search::{SearchClient, SearchMode, SearchSession};
use symbology::{Theme, point_style};
use viewstate::ViewState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    let modes: Vec<&str> = SearchMode::ALL.iter().map(|m| m.as_path()).collect();
    format!(
        "usage: explorer <mode> <term> [term ...] [--k N] [--tsv FILE] [--dark]\n\
         modes: {}\n\
         env: GENESPACE_SERVER_URL (required), GENESPACE_OUT_DIR (default .)",
        modes.join(", ")
    )
}

struct Args {
    mode: SearchMode,
    terms: Vec<String>,
    k: Option<u32>,
    tsv: Option<String>,
    theme: Theme,
}

fn parse_args(args: Vec<String>) -> Result<Args, String> {
    if args.is_empty() {
        return Err(usage());
    }

    let mode: SearchMode = args[0].parse().map_err(|e| format!("{e}\n\n{}", usage()))?;
    let mut terms: Vec<String> = Vec::new();
    let mut k: Option<u32> = None;
    let mut tsv: Option<String> = None;
    let mut theme = Theme::Light;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--k" => {
                i += 1;
                let raw = args.get(i).ok_or("--k requires a value")?;
                k = Some(raw.parse().map_err(|_| format!("bad --k value: {raw}"))?);
            }
            "--tsv" => {
                i += 1;
                tsv = Some(args.get(i).ok_or("--tsv requires a value")?.clone());
            }
            "--dark" => theme = Theme::Dark,
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            term => terms.push(term.to_string()),
        }
        i += 1;
    }

    if terms.is_empty() {
        return Err(usage());
    }
    if terms.len() > 1 && !mode.is_multi_term() {
        return Err(format!(
            "mode {} takes a single term, got {}",
            mode,
            terms.len()
        ));
    }
    if k.is_some() && mode != SearchMode::Neighbors {
        return Err("--k only applies to neighbors mode".to_string());
    }

    Ok(Args {
        mode,
        terms,
        k,
        tsv,
        theme,
    })
}

async fn real_main() -> Result<(), String> {
    let args = parse_args(env::args().skip(1).collect())?;

    let base_url =
        env::var("GENESPACE_SERVER_URL").map_err(|_| "GENESPACE_SERVER_URL is not set")?;
    let out_dir = env::var("GENESPACE_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    let client = SearchClient::new(base_url);
    let mut session = SearchSession::new();
    let (generation, cancel) = session.begin();

    let result = match args.mode {
        SearchMode::Neighbors => {
            let k = args.k.unwrap_or(10);
            client
                .search_neighbors(&args.terms[0], k, &cancel)
                .await
                .map_err(|e| e.to_string())?
        }
        mode => client
            .search(mode, &args.terms, &cancel)
            .await
            .map_err(|e| e.to_string())?,
    };

    // One request, so this always holds; kept as the same guard the UI runs
    // before letting a response touch the view state.
    if !session.is_current(generation) {
        return Ok(());
    }

    let mut view = ViewState::new();
    view.apply_search_result(&result);
    info!(
        spaces = result.spaces.len(),
        zoom = view.zoom,
        "search applied"
    );

    println!(
        "{} spaces; center ({}, {}) zoom {}",
        result.spaces.len(),
        view.latlng.lat,
        view.latlng.lng,
        view.zoom
    );

    let coords = Coords::new(0.0, 0.0, result.zoom);
    let collection = to_feature_collection(&result.spaces, coords, true);
    println!("feature collection: {} features", collection.len());

    for (space, feature) in result.spaces.iter().zip(&collection.features) {
        let style = point_style(feature, view.zoom, args.theme);
        println!("{} (r={} fill={})", space.id, style.radius, style.fill_color);
        for (key, value) in space.value.info_fields() {
            println!("  {key}: {value}");
        }
    }

    if let Some(filename) = args.tsv {
        let doc = Document::tsv(filename, spaces_to_tsv(&result.spaces));
        let path = doc
            .write_to(&out_dir)
            .map_err(|e| format!("write {}: {e}", out_dir.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
