//! English translations (reference locale)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Sidebar
    m.insert(Key::SidebarLibrary, "Library");
    m.insert(Key::SidebarAlbums, "Albums");
    m.insert(Key::SidebarArtists, "Artists");
    m.insert(Key::SidebarPlaylists, "Playlists");
    m.insert(Key::SidebarSmartPlaylists, "Smart playlists");
    m.insert(Key::SidebarNewPlaylist, "New playlist");
    m.insert(Key::SidebarQueue, "Queue");
    m.insert(Key::SidebarNowPlaying, "Now playing");
    m.insert(Key::SidebarLyrics, "Lyrics");
    m.insert(Key::SidebarWiki, "Wiki");
    m.insert(Key::SidebarMap, "Map");
    m.insert(Key::SidebarSettings, "Settings");
    m.insert(Key::SidebarSearchPlaceholder, "Search");
    m.insert(Key::SidebarSearchResults, "Results for \"{text}\"");

    // Library
    m.insert(Key::LibraryEmptyTitle, "Your library is empty");
    m.insert(
        Key::LibraryEmptyBody,
        "Drop folders or audio files here, or add a folder in <b>Settings</b>.",
    );
    m.insert(Key::LibraryImporting, "Importing {{1 file | ?? files}}...");
    m.insert(
        Key::LibraryImportDone,
        "Imported {{1 track | ?? tracks}} in {seconds}s",
    );
    m.insert(Key::LibraryTrackCount, "{{1 track | ?? tracks}}");
    m.insert(Key::LibraryColumnTitle, "Title");
    m.insert(Key::LibraryColumnArtist, "Artist");
    m.insert(Key::LibraryColumnAlbum, "Album");
    m.insert(Key::LibraryColumnYear, "Year");
    m.insert(Key::LibraryColumnGenre, "Genre");
    m.insert(Key::LibraryColumnDuration, "Duration");
    m.insert(Key::LibraryColumnTrackNumber, "Track");
    m.insert(Key::LibraryFavourites, "Favourites");
    m.insert(Key::LibraryShowInFolder, "Show in folder");
    m.insert(Key::LibraryRemoveFromLibrary, "Remove from library");
    m.insert(
        Key::LibraryRemoveConfirm,
        "Remove {{1 track | ?? tracks}} from your library? Files on disk are kept.",
    );
    m.insert(Key::LibraryMissingFile, "File not found: {path}");

    // Player
    m.insert(Key::PlayerPlay, "Play");
    m.insert(Key::PlayerPause, "Pause");
    m.insert(Key::PlayerNext, "Next");
    m.insert(Key::PlayerPrevious, "Previous");
    m.insert(Key::PlayerShuffle, "Shuffle");
    m.insert(Key::PlayerRepeat, "Repeat");
    m.insert(Key::PlayerVolume, "Volume");
    m.insert(Key::PlayerMute, "Mute");
    m.insert(Key::PlayerNothingPlaying, "Nothing playing");
    m.insert(Key::PlayerStreamingTo, "Streaming to {device}");

    // Queue
    m.insert(Key::QueueUpNext, "Up next");
    m.insert(Key::QueueEmpty, "The queue is empty");
    m.insert(Key::QueueClear, "Clear queue");
    m.insert(Key::QueuePlayNext, "Play next");
    m.insert(Key::QueueAddToQueue, "Add to queue");
    m.insert(Key::QueueTrackCount, "{{1 track | ?? tracks}} in queue");

    // Playlists
    m.insert(Key::PlaylistsRename, "Rename");
    m.insert(Key::PlaylistsDelete, "Delete");
    m.insert(
        Key::PlaylistsDeleteConfirm,
        "Delete playlist \"{name}\"? This cannot be undone.",
    );
    m.insert(Key::PlaylistsEmpty, "This playlist is empty");
    m.insert(Key::PlaylistsAddTo, "Add to playlist");
    m.insert(Key::PlaylistsAdded, "Added {{1 track | ?? tracks}} to {name}");
    m.insert(Key::PlaylistsNamePlaceholder, "Playlist name");

    // Albums
    m.insert(Key::AlbumsSortBy, "Sort by");
    m.insert(Key::AlbumsSortTitle, "Title");
    m.insert(Key::AlbumsSortArtist, "Artist");
    m.insert(Key::AlbumsSortYear, "Year");
    m.insert(Key::AlbumsAlbumCount, "{{1 album | ?? albums}}");
    m.insert(Key::AlbumsByArtist, "by {artist}");

    // Artists
    m.insert(Key::ArtistsAlbumCount, "{{1 album | ?? albums}}");
    m.insert(Key::ArtistsTrackCount, "{{1 track | ?? tracks}}");
    m.insert(Key::ArtistsOpenWiki, "Open in Wiki");

    // Settings
    m.insert(Key::SettingsTitle, "Settings");
    m.insert(Key::SettingsGeneral, "General");
    m.insert(Key::SettingsLanguage, "Language");
    m.insert(Key::SettingsTheme, "Theme");
    m.insert(Key::SettingsFollowSystemTheme, "Follow system theme");
    m.insert(Key::SettingsFolders, "Folders");
    m.insert(Key::SettingsFolder, "{{1 folder | ?? folders}}");
    m.insert(Key::SettingsAddFolder, "Add folder");
    m.insert(Key::SettingsWatchFolders, "Watch folders for changes");
    m.insert(Key::SettingsRescan, "Rescan library");
    m.insert(Key::SettingsAudioOutput, "Audio output");
    m.insert(Key::SettingsFollowSystemOutput, "Follow system output device");
    m.insert(Key::SettingsAiModel, "AI model");
    m.insert(
        Key::SettingsAiModelHint,
        "Used to enrich metadata. Requires an <b>OpenAI</b> key or a local <i>llama.cpp</i> server.",
    );
    m.insert(Key::SettingsOpenAiKey, "OpenAI API key");
    m.insert(Key::SettingsLlamaUrl, "llama.cpp server URL");
    m.insert(Key::SettingsLastFm, "Last.fm");
    m.insert(Key::SettingsLastFmConnect, "Connect to Last.fm");
    m.insert(Key::SettingsLastFmConnected, "Connected as {username}");
    m.insert(Key::SettingsDiscogsToken, "Discogs token");
    m.insert(Key::SettingsCacheSize, "Artwork cache: {size}");
    m.insert(Key::SettingsClearCache, "Clear cache");
    m.insert(Key::SettingsVersion, "Version {version}");
    m.insert(Key::SettingsCheckForUpdates, "Check for updates");
    m.insert(
        Key::SettingsAboutBody,
        "Musicat is a music library manager for people who care about their files.<br/>Source code on <a href=\"{url}\">GitHub</a>.",
    );

    // Track info
    m.insert(Key::TrackInfoTitle, "Track info");
    m.insert(Key::TrackInfoSave, "Save");
    m.insert(Key::TrackInfoCancel, "Cancel");
    m.insert(Key::TrackInfoReset, "Reset");
    m.insert(Key::TrackInfoArtwork, "Artwork");
    m.insert(
        Key::TrackInfoArtworkTooltipTitle,
        "Where does the artwork come from?",
    );
    m.insert(
        Key::TrackInfoArtworkTooltipBody,
        "Artwork is read from the <b>file metadata</b> first, then from an image such as <i>cover.jpg</i> in the same folder.<br/>Drop an image here to replace it.",
    );
    m.insert(Key::TrackInfoFileInfo, "File info");
    m.insert(Key::TrackInfoCodec, "Codec");
    m.insert(Key::TrackInfoBitrate, "Bitrate: {bitrate} kbps");
    m.insert(Key::TrackInfoSampleRate, "Sample rate: {sampleRate} Hz");
    m.insert(Key::TrackInfoPath, "Path");
    m.insert(Key::TrackInfoEditingMultiple, "Editing {{1 track | ?? tracks}}");
    m.insert(Key::TrackInfoUnsavedChanges, "You have unsaved changes");
    m.insert(Key::TrackInfoLookUpDiscogs, "Look up on Discogs");
    m.insert(Key::TrackInfoEnrichWithAi, "Enrich with AI");

    // Toasts
    m.insert(Key::ToastsImportFailed, "Could not import {path}: {error}");
    m.insert(Key::ToastsFileNotFound, "File not found: {path}");
    m.insert(Key::ToastsCopied, "Copied to clipboard");
    m.insert(
        Key::ToastsMetadataSaved,
        "Metadata saved for {{1 track | ?? tracks}}",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
