//! ROM listing

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Session;
use crate::cli::output::{OutputFormat, PageOutput, format_size, print_formatted, status_marker};
use crate::model::Rom;
use crate::query;

#[derive(Args, Debug)]
pub struct RomsArgs {
    /// Game to load ROMs for (reuses the loaded ROMs if omitted)
    game_id: Option<i64>,

    /// System the ignored flag is computed against (defaults to the system
    /// whose games are loaded)
    #[arg(long)]
    system: Option<i64>,

    /// Page to show
    #[arg(long)]
    page: Option<usize>,
}

pub async fn run(
    args: RomsArgs,
    session: &mut Session,
    format: OutputFormat,
    _quiet: bool,
) -> Result<()> {
    let store = &session.store;

    match args.game_id {
        Some(game_id) => {
            let system_id = args
                .system
                .or(session.system_id)
                .context("No system selected. Pass --system or load games first.")?;
            query::get_roms_by_game_id_and_system_id(
                session.client.as_ref(),
                store,
                game_id,
                system_id,
            )
            .await
            .with_context(|| format!("Failed to fetch roms for game {}", game_id))?;
            session.game_id = Some(game_id);
            query::set_roms_page(store, args.page.unwrap_or(1));
        }
        None if session.game_id.is_none() => {
            anyhow::bail!("No roms loaded. Pass a game id.");
        }
        None => {
            if let Some(page) = args.page {
                query::set_roms_page(store, page);
            }
        }
    }

    let output = PageOutput::from_collection(&store.roms);
    print_formatted(&output, format, format_roms_text);

    Ok(())
}

fn format_rom_line(rom: &Rom) -> String {
    let location = rom
        .romfile
        .as_ref()
        .map(|file| file.path.as_str())
        .unwrap_or("<missing>");
    let mut line = format!(
        "{} {}  {}  {}",
        status_marker(rom.romfile.is_some()),
        rom.name,
        format_size(rom.size),
        location
    );
    if rom.ignored {
        line.push_str("  (ignored)");
    }
    line
}

fn format_roms_text(output: &PageOutput<Rom>) -> String {
    if output.total == 0 {
        return "Game has no roms".to_string();
    }

    let mut lines: Vec<String> = output.items.iter().map(format_rom_line).collect();
    lines.push(output.footer("roms"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::{Value, json};

    use crate::filter::GameFilter;
    use crate::graphql::testing::FakeServer;
    use crate::model::Romfile;
    use crate::state::Store;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        roms: RomsArgs,
    }

    fn session(responses: Vec<(&'static str, Value)>) -> Session {
        Session::with_transport(
            Box::new(FakeServer::new(responses)),
            Store::new(2, GameFilter::default()),
        )
    }

    async fn roms(session: &mut Session, args: &[&str]) -> Result<()> {
        let cli = TestCli::parse_from(std::iter::once("roms").chain(args.iter().copied()));
        run(cli.roms, session, OutputFormat::Json, true).await
    }

    fn rom(name: &str) -> Value {
        json!({ "name": name, "size": 16, "romfile": null, "ignored": false })
    }

    #[test]
    fn test_rom_line() {
        let mut rom = Rom {
            name: "tetris.gb".to_string(),
            size: 32768,
            romfile: Some(Romfile {
                path: "/roms/gb/tetris.gb".to_string(),
                size: 32768,
            }),
            ignored: false,
        };
        assert_eq!(format_rom_line(&rom), "[OK] tetris.gb  32.0 KB  /roms/gb/tetris.gb");

        rom.romfile = None;
        rom.ignored = true;
        assert_eq!(format_rom_line(&rom), "[  ] tetris.gb  32.0 KB  <missing>  (ignored)");
    }

    #[tokio::test]
    async fn test_game_without_roms_stays_loaded() {
        let mut session = session(vec![("roms(gameId: 5)", json!({ "roms": [] }))]);

        roms(&mut session, &["5", "--system", "1"]).await.unwrap();
        assert!(session.store.roms.is_empty());
        assert_eq!(session.game_id, Some(5));

        roms(&mut session, &["--page", "2"]).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_roms_loaded() {
        let mut session = session(vec![]);
        let error = roms(&mut session, &[]).await.unwrap_err();
        assert_eq!(error.to_string(), "No roms loaded. Pass a game id.");
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_page_and_view() {
        let mut session = session(vec![(
            "roms(gameId: 7)",
            json!({ "roms": [rom("a"), rom("b"), rom("c")] }),
        )]);
        roms(&mut session, &["7", "--system", "1", "--page", "2"]).await.unwrap();

        assert!(roms(&mut session, &["8", "--system", "1"]).await.is_err());

        assert_eq!(session.store.roms.page.get(), 2);
        let view = session.store.roms.view.get();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "c");
        assert_eq!(session.game_id, Some(7));
    }

    #[tokio::test]
    async fn test_system_defaults_to_loaded_games() {
        let mut session = session(vec![("ignored(systemId: 3)", json!({ "roms": [rom("a")] }))]);
        session.system_id = Some(3);

        roms(&mut session, &["7"]).await.unwrap();
        assert_eq!(session.store.roms.len(), 1);
    }
}
