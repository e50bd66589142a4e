use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sptcli::{cli, config, error, types::PkceToken, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Spotify API
    Auth,

    /// Search the catalog
    Search(SearchOptions),

    /// Handle the user's playlists
    Playlists(PlaylistsOptions),

    /// Show the tracks of one playlist
    Playlist(PlaylistOptions),

    /// List followed artists
    Artists,

    /// Show an artist with top tracks and releases
    Artist(ArtistOptions),

    /// Show an album and its tracks
    Album(AlbumOptions),

    /// Show a single track
    Track(TrackOptions),

    /// Handle the user's saved tracks
    Library(LibraryOptions),

    /// Some helper information about caches and settings
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// Entity kind(s) to search for; comma-separated or "all"
    #[clap(long = "type", default_value = "all", value_parser = utils::parse_search_kinds)]
    pub search_types: utils::SearchKinds,

    /// Maximum results per entity kind (1-50)
    #[clap(long, default_value_t = 20)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle the user's playlists",
    args_conflicts_with_subcommands = true
)]
pub struct PlaylistsOptions {
    /// Subcommands under `playlists` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<PlaylistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistsSubcommand {
    /// Refresh the playlist cache from the API
    Update,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist ID
    pub id: String,

    /// Refresh the cached track list from the API
    #[clap(long)]
    pub update: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist ID
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Album ID
    pub id: String,

    /// Refresh the cached track list from the API
    #[clap(long)]
    pub update: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Track ID
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle the user's saved tracks",
    args_conflicts_with_subcommands = true
)]
pub struct LibraryOptions {
    /// Subcommands under `library` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<LibrarySubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LibrarySubcommand {
    /// Refresh the library cache from the API
    Update,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// Show cache and token status
    #[clap(long)]
    cache: bool,

    /// Show the settings record
    #[clap(long)]
    settings: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }

        Command::Search(opt) => cli::search(opt.query, opt.search_types, opt.limit).await,

        Command::Playlists(opt) => match opt.command {
            Some(PlaylistsSubcommand::Update) => cli::list_playlists(true).await,
            None => cli::list_playlists(false).await,
        },

        Command::Playlist(opt) => cli::show_playlist(opt.id, opt.update).await,

        Command::Artists => cli::list_followed().await,
        Command::Artist(opt) => cli::show_artist(opt.id).await,

        Command::Album(opt) => cli::show_album(opt.id, opt.update).await,
        Command::Track(opt) => cli::show_track(opt.id).await,

        Command::Library(opt) => match opt.command {
            Some(LibrarySubcommand::Update) => cli::update_library().await,
            None => cli::list_library().await,
        },

        Command::Info(opt) => cli::info(opt.cache, opt.settings).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
