//! Internationalization (i18n) data for Musicat
//!
//! Structure:
//! - i18n.rs: Core types (Language, Section, Key) and translation lookup
//! - en.rs: English translations (reference locale)
//! - zh.rs: Chinese translations (简体中文)
//! - tokens.rs: Placeholder / plural / tag scanning of translated values
//! - markup.rs: Tag balancing and the trusted-markup boundary
//! - bundle.rs: Flattened bundles, JSON import and export
//! - audit.rs: Conformance of a bundle against the reference locale

mod audit;
mod bundle;
mod en;
mod markup;
mod tokens;
mod zh;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use audit::{AuditReport, Finding, FindingKind, Severity, audit, audit_schema};
pub use bundle::{Bundle, BundleError};
pub use markup::{MarkupError, TrustedMarkup, check_balanced};
pub use tokens::{Tag, TagKind, Token, TokenError, has_markup, placeholder_names, plural_count, scan};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Reference locale every other bundle conforms to
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-cn")]
    ChineseSimplified,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::ChineseSimplified => "简体中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseSimplified => "zh-cn",
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::ChineseSimplified]
    }

    /// Look up a language by its code. Case and `-`/`_` are not significant.
    pub fn from_code(code: &str) -> Option<Language> {
        let normalized = code.trim().to_ascii_lowercase().replace('_', "-");
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == normalized)
    }

    pub fn is_reference(&self) -> bool {
        *self == Language::English
    }

    fn translations(&self) -> &'static HashMap<Key, &'static str> {
        match self {
            Language::English => en::translations(),
            Language::ChineseSimplified => zh::translations(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Declares the translation schema: sections, their keys and the field name
/// each key carries in the exported bundle.
macro_rules! translation_schema {
    ($(
        $section:ident => $section_name:literal {
            $($key:ident => $field:literal,)+
        }
    )+) => {
        /// Top-level sections of a bundle
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Section {
            $($section,)+
        }

        impl Section {
            pub const ALL: &'static [Section] = &[$(Section::$section,)+];

            /// Section name as it appears in key paths
            pub fn name(&self) -> &'static str {
                match self {
                    $(Section::$section => $section_name,)+
                }
            }

            pub fn from_name(name: &str) -> Option<Section> {
                Section::ALL.iter().copied().find(|s| s.name() == name)
            }

            /// Keys belonging to this section, in schema order
            pub fn keys(self) -> impl Iterator<Item = Key> {
                Key::ALL.iter().copied().filter(move |k| k.section() == self)
            }
        }

        /// Translation keys
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($($key,)+)+
        }

        impl Key {
            /// The canonical key set, in schema order
            pub const ALL: &'static [Key] = &[$($(Key::$key,)+)+];

            pub fn section(&self) -> Section {
                match self {
                    $($(Key::$key => Section::$section,)+)+
                }
            }

            /// Field name within the section
            pub fn field(&self) -> &'static str {
                match self {
                    $($(Key::$key => $field,)+)+
                }
            }
        }
    };
}

translation_schema! {
    Sidebar => "sidebar" {
        SidebarLibrary => "library",
        SidebarAlbums => "albums",
        SidebarArtists => "artists",
        SidebarPlaylists => "playlists",
        SidebarSmartPlaylists => "smartPlaylists",
        SidebarNewPlaylist => "newPlaylist",
        SidebarQueue => "queue",
        SidebarNowPlaying => "nowPlaying",
        SidebarLyrics => "lyrics",
        SidebarWiki => "wiki",
        SidebarMap => "map",
        SidebarSettings => "settings",
        SidebarSearchPlaceholder => "searchPlaceholder",
        SidebarSearchResults => "searchResults",
    }
    Library => "library" {
        LibraryEmptyTitle => "emptyTitle",
        LibraryEmptyBody => "emptyBody",
        LibraryImporting => "importing",
        LibraryImportDone => "importDone",
        LibraryTrackCount => "trackCount",
        LibraryColumnTitle => "columnTitle",
        LibraryColumnArtist => "columnArtist",
        LibraryColumnAlbum => "columnAlbum",
        LibraryColumnYear => "columnYear",
        LibraryColumnGenre => "columnGenre",
        LibraryColumnDuration => "columnDuration",
        LibraryColumnTrackNumber => "columnTrackNumber",
        LibraryFavourites => "favourites",
        LibraryShowInFolder => "showInFolder",
        LibraryRemoveFromLibrary => "removeFromLibrary",
        LibraryRemoveConfirm => "removeConfirm",
        LibraryMissingFile => "missingFile",
    }
    Player => "player" {
        PlayerPlay => "play",
        PlayerPause => "pause",
        PlayerNext => "next",
        PlayerPrevious => "previous",
        PlayerShuffle => "shuffle",
        PlayerRepeat => "repeat",
        PlayerVolume => "volume",
        PlayerMute => "mute",
        PlayerNothingPlaying => "nothingPlaying",
        PlayerStreamingTo => "streamingTo",
    }
    Queue => "queue" {
        QueueUpNext => "upNext",
        QueueEmpty => "empty",
        QueueClear => "clear",
        QueuePlayNext => "playNext",
        QueueAddToQueue => "addToQueue",
        QueueTrackCount => "trackCount",
    }
    Playlists => "playlists" {
        PlaylistsRename => "rename",
        PlaylistsDelete => "delete",
        PlaylistsDeleteConfirm => "deleteConfirm",
        PlaylistsEmpty => "empty",
        PlaylistsAddTo => "addTo",
        PlaylistsAdded => "added",
        PlaylistsNamePlaceholder => "namePlaceholder",
    }
    Albums => "albums" {
        AlbumsSortBy => "sortBy",
        AlbumsSortTitle => "sortTitle",
        AlbumsSortArtist => "sortArtist",
        AlbumsSortYear => "sortYear",
        AlbumsAlbumCount => "albumCount",
        AlbumsByArtist => "byArtist",
    }
    Artists => "artists" {
        ArtistsAlbumCount => "albumCount",
        ArtistsTrackCount => "trackCount",
        ArtistsOpenWiki => "openWiki",
    }
    Settings => "settings" {
        SettingsTitle => "title",
        SettingsGeneral => "general",
        SettingsLanguage => "language",
        SettingsTheme => "theme",
        SettingsFollowSystemTheme => "followSystemTheme",
        SettingsFolders => "folders",
        SettingsFolder => "folder",
        SettingsAddFolder => "addFolder",
        SettingsWatchFolders => "watchFolders",
        SettingsRescan => "rescan",
        SettingsAudioOutput => "audioOutput",
        SettingsFollowSystemOutput => "followSystemOutput",
        SettingsAiModel => "aiModel",
        SettingsAiModelHint => "aiModelHint",
        SettingsOpenAiKey => "openAiKey",
        SettingsLlamaUrl => "llamaUrl",
        SettingsLastFm => "lastFm",
        SettingsLastFmConnect => "lastFmConnect",
        SettingsLastFmConnected => "lastFmConnected",
        SettingsDiscogsToken => "discogsToken",
        SettingsCacheSize => "cacheSize",
        SettingsClearCache => "clearCache",
        SettingsVersion => "version",
        SettingsCheckForUpdates => "checkForUpdates",
        SettingsAboutBody => "aboutBody",
    }
    TrackInfo => "trackInfo" {
        TrackInfoTitle => "title",
        TrackInfoSave => "save",
        TrackInfoCancel => "cancel",
        TrackInfoReset => "reset",
        TrackInfoArtwork => "artwork",
        TrackInfoArtworkTooltipTitle => "artworkTooltipTitle",
        TrackInfoArtworkTooltipBody => "artworkTooltipBody",
        TrackInfoFileInfo => "fileInfo",
        TrackInfoCodec => "codec",
        TrackInfoBitrate => "bitrate",
        TrackInfoSampleRate => "sampleRate",
        TrackInfoPath => "path",
        TrackInfoEditingMultiple => "editingMultiple",
        TrackInfoUnsavedChanges => "unsavedChanges",
        TrackInfoLookUpDiscogs => "lookUpDiscogs",
        TrackInfoEnrichWithAi => "enrichWithAi",
    }
    Toasts => "toasts" {
        ToastsImportFailed => "importFailed",
        ToastsFileNotFound => "fileNotFound",
        ToastsCopied => "copied",
        ToastsMetadataSaved => "metadataSaved",
    }
}

impl Key {
    /// Dotted key path, e.g. `settings.aiModel`
    pub fn path(&self) -> String {
        format!("{}.{}", self.section().name(), self.field())
    }

    pub fn from_path(path: &str) -> Option<Key> {
        let (section, field) = path.split_once('.')?;
        let section = Section::from_name(section)?;
        section.keys().find(|k| k.field() == field)
    }

    /// Whether the renderer injects this key's value as raw HTML
    pub fn renders_markup(&self) -> bool {
        matches!(
            self,
            Key::LibraryEmptyBody
                | Key::SettingsAiModelHint
                | Key::SettingsAboutBody
                | Key::TrackInfoArtworkTooltipBody
        )
    }
}

/// Get the plain text for a key in the specified language.
///
/// The value is not safe to inject as HTML; use [`markup`] for keys the
/// renderer trusts.
pub fn text(lang: Language, key: Key) -> Option<&'static str> {
    lang.translations().get(&key).copied()
}

/// Get a markup-bearing value. Returns `None` for keys not declared with
/// [`Key::renders_markup`].
pub fn markup(lang: Language, key: Key) -> Option<TrustedMarkup> {
    if !key.renders_markup() {
        return None;
    }
    text(lang, key).map(TrustedMarkup::new)
}
