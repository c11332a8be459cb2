//! Chinese translations (简体中文)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Sidebar
    m.insert(Key::SidebarLibrary, "音乐库");
    m.insert(Key::SidebarAlbums, "专辑");
    m.insert(Key::SidebarArtists, "艺术家");
    m.insert(Key::SidebarPlaylists, "播放列表");
    m.insert(Key::SidebarSmartPlaylists, "智能播放列表");
    m.insert(Key::SidebarNewPlaylist, "新建播放列表");
    m.insert(Key::SidebarQueue, "播放队列");
    m.insert(Key::SidebarNowPlaying, "正在播放");
    m.insert(Key::SidebarLyrics, "歌词");
    m.insert(Key::SidebarWiki, "百科");
    m.insert(Key::SidebarMap, "地图");
    m.insert(Key::SidebarSettings, "设置");
    m.insert(Key::SidebarSearchPlaceholder, "搜索");
    m.insert(Key::SidebarSearchResults, "“{text}”的搜索结果");

    // Library
    m.insert(Key::LibraryEmptyTitle, "音乐库为空");
    m.insert(
        Key::LibraryEmptyBody,
        "将文件夹或音频文件拖放到此处，或在<b>设置</b>中添加文件夹。",
    );
    m.insert(Key::LibraryImporting, "正在导入 {{1 个文件 | ?? 个文件}}...");
    m.insert(
        Key::LibraryImportDone,
        "已导入 {{1 首曲目 | ?? 首曲目}}，用时 {seconds} 秒",
    );
    m.insert(Key::LibraryTrackCount, "{{1 首曲目 | ?? 首曲目}}");
    m.insert(Key::LibraryColumnTitle, "标题");
    m.insert(Key::LibraryColumnArtist, "艺术家");
    m.insert(Key::LibraryColumnAlbum, "专辑");
    m.insert(Key::LibraryColumnYear, "年份");
    m.insert(Key::LibraryColumnGenre, "流派");
    m.insert(Key::LibraryColumnDuration, "时长");
    m.insert(Key::LibraryColumnTrackNumber, "音轨号");
    m.insert(Key::LibraryFavourites, "收藏");
    m.insert(Key::LibraryShowInFolder, "在文件夹中显示");
    m.insert(Key::LibraryRemoveFromLibrary, "从音乐库中移除");
    m.insert(
        Key::LibraryRemoveConfirm,
        "要从音乐库中移除 {{1 首曲目 | ?? 首曲目}}吗？磁盘上的文件将被保留。",
    );
    m.insert(Key::LibraryMissingFile, "找不到文件：{path}");

    // Player
    m.insert(Key::PlayerPlay, "播放");
    m.insert(Key::PlayerPause, "暂停");
    m.insert(Key::PlayerNext, "下一首");
    m.insert(Key::PlayerPrevious, "上一首");
    m.insert(Key::PlayerShuffle, "随机播放");
    m.insert(Key::PlayerRepeat, "循环播放");
    m.insert(Key::PlayerVolume, "音量");
    m.insert(Key::PlayerMute, "静音");
    m.insert(Key::PlayerNothingPlaying, "当前没有播放");
    m.insert(Key::PlayerStreamingTo, "正在串流到 {device}");

    // Queue
    m.insert(Key::QueueUpNext, "接下来播放");
    m.insert(Key::QueueEmpty, "播放队列为空");
    m.insert(Key::QueueClear, "清空队列");
    m.insert(Key::QueuePlayNext, "下一首播放");
    m.insert(Key::QueueAddToQueue, "添加到队列");
    m.insert(Key::QueueTrackCount, "队列中有 {{1 首曲目 | ?? 首曲目}}");

    // Playlists
    m.insert(Key::PlaylistsRename, "重命名");
    m.insert(Key::PlaylistsDelete, "删除");
    m.insert(
        Key::PlaylistsDeleteConfirm,
        "确定删除播放列表“{name}”吗？此操作无法撤销。",
    );
    m.insert(Key::PlaylistsEmpty, "此播放列表为空");
    m.insert(Key::PlaylistsAddTo, "添加到播放列表");
    m.insert(
        Key::PlaylistsAdded,
        "已将 {{1 首曲目 | ?? 首曲目}}添加到 {name}",
    );
    m.insert(Key::PlaylistsNamePlaceholder, "播放列表名称");

    // Albums
    m.insert(Key::AlbumsSortBy, "排序方式");
    m.insert(Key::AlbumsSortTitle, "标题");
    m.insert(Key::AlbumsSortArtist, "艺术家");
    m.insert(Key::AlbumsSortYear, "年份");
    m.insert(Key::AlbumsAlbumCount, "{{1 张专辑 | ?? 张专辑}}");
    m.insert(Key::AlbumsByArtist, "{artist} 的作品");

    // Artists
    m.insert(Key::ArtistsAlbumCount, "{{1 张专辑 | ?? 张专辑}}");
    m.insert(Key::ArtistsTrackCount, "{{1 首曲目 | ?? 首曲目}}");
    m.insert(Key::ArtistsOpenWiki, "在百科中打开");

    // Settings
    m.insert(Key::SettingsTitle, "设置");
    m.insert(Key::SettingsGeneral, "通用");
    m.insert(Key::SettingsLanguage, "语言");
    m.insert(Key::SettingsTheme, "主题");
    m.insert(Key::SettingsFollowSystemTheme, "跟随系统主题");
    m.insert(Key::SettingsFolders, "文件夹");
    m.insert(Key::SettingsFolder, "{{1 个文件夹 | ?? 个文件夹}}");
    m.insert(Key::SettingsAddFolder, "添加文件夹");
    m.insert(Key::SettingsWatchFolders, "监视文件夹变化");
    m.insert(Key::SettingsRescan, "重新扫描音乐库");
    m.insert(Key::SettingsAudioOutput, "音频输出");
    m.insert(Key::SettingsFollowSystemOutput, "跟随系统输出设备");
    m.insert(Key::SettingsAiModel, "AI 模型");
    m.insert(
        Key::SettingsAiModelHint,
        "用于补全元数据。需要 <b>OpenAI</b> 密钥或本地 <i>llama.cpp</i> 服务器。",
    );
    m.insert(Key::SettingsOpenAiKey, "OpenAI API 密钥");
    m.insert(Key::SettingsLlamaUrl, "llama.cpp 服务器地址");
    m.insert(Key::SettingsLastFm, "Last.fm");
    m.insert(Key::SettingsLastFmConnect, "连接 Last.fm");
    m.insert(Key::SettingsLastFmConnected, "已连接为 {username}");
    m.insert(Key::SettingsDiscogsToken, "Discogs 令牌");
    m.insert(Key::SettingsCacheSize, "封面缓存：{size}");
    m.insert(Key::SettingsClearCache, "清除缓存");
    m.insert(Key::SettingsVersion, "版本 {version}");
    m.insert(Key::SettingsCheckForUpdates, "检查更新");
    m.insert(
        Key::SettingsAboutBody,
        "Musicat 是一款为在意自己音乐文件的人打造的音乐库管理器。<br/>源代码托管于 <a href=\"{url}\">GitHub</a>。",
    );

    // Track info
    m.insert(Key::TrackInfoTitle, "曲目信息");
    m.insert(Key::TrackInfoSave, "保存");
    m.insert(Key::TrackInfoCancel, "取消");
    m.insert(Key::TrackInfoReset, "重置");
    m.insert(Key::TrackInfoArtwork, "封面");
    m.insert(Key::TrackInfoArtworkTooltipTitle, "封面从何而来？");
    m.insert(
        Key::TrackInfoArtworkTooltipBody,
        "优先从<b>文件元数据</b>读取封面，其次读取同一文件夹中的图片，例如 <i>cover.jpg</i>。<br/>将图片拖放到此处即可替换。",
    );
    m.insert(Key::TrackInfoFileInfo, "文件信息");
    m.insert(Key::TrackInfoCodec, "编解码器");
    m.insert(Key::TrackInfoBitrate, "比特率：{bitrate} kbps");
    m.insert(Key::TrackInfoSampleRate, "采样率：{sampleRate} Hz");
    m.insert(Key::TrackInfoPath, "路径");
    m.insert(
        Key::TrackInfoEditingMultiple,
        "正在编辑 {{1 首曲目 | ?? 首曲目}}",
    );
    m.insert(Key::TrackInfoUnsavedChanges, "有未保存的更改");
    m.insert(Key::TrackInfoLookUpDiscogs, "在 Discogs 上查找");
    m.insert(Key::TrackInfoEnrichWithAi, "使用 AI 补全");

    // Toasts
    m.insert(Key::ToastsImportFailed, "无法导入 {path}：{error}");
    m.insert(Key::ToastsFileNotFound, "找不到文件：{path}");
    m.insert(Key::ToastsCopied, "已复制到剪贴板");
    m.insert(
        Key::ToastsMetadataSaved,
        "已保存 {{1 首曲目 | ?? 首曲目}}的元数据",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
