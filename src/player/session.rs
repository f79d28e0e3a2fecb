//! Playback, playlist and moderation state for one user

use super::config::PlayerConfig;
use super::cursor::Cursor;
use super::error::{PlayerError, PlayerResult};
use super::outcome::{Flagged, NowPlaying, Pause, Playback, SearchKind, SearchResults};
use crate::model::{Catalog, Playlist, Video};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// A player session over a catalog.
///
/// Every operation either completes fully or is rejected with a
/// [`PlayerError`] before anything is mutated.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    cursor: Cursor,

    /// Playlists keyed by lower-cased name
    playlists: BTreeMap<String, Playlist>,

    default_flag_reason: String,
    rng: StdRng,
}

impl Session {
    /// Create a session with default configuration
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, &PlayerConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: &PlayerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            catalog,
            cursor: Cursor::Empty,
            playlists: BTreeMap::new(),
            default_flag_reason: config.default_flag_reason.clone(),
            rng,
        }
    }

    /// Read access to the catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Number of videos in the catalog, flagged ones included
    pub fn number_of_videos(&self) -> usize {
        self.catalog.video_count()
    }

    /// Every video sorted by title
    pub fn all_videos(&self) -> Vec<Video> {
        sorted_by_title(self.catalog.videos())
    }

    // Playback

    pub fn play(&mut self, video_id: &str) -> PlayerResult<Playback> {
        self.ensure_not_flagged(video_id)?;
        let video = self
            .catalog
            .get_video(video_id)
            .cloned()
            .ok_or(PlayerError::VideoNotFound)?;

        let stopped = self.unload();
        log::debug!("Playing {:?}", video.id);
        self.cursor = Cursor::Playing(video.id.clone());

        Ok(Playback {
            stopped,
            playing: video,
        })
    }

    pub fn stop(&mut self) -> PlayerResult<Video> {
        self.unload().ok_or(PlayerError::NoVideoPlaying)
    }

    /// Stop whatever is loaded, then play a uniformly chosen playable video
    pub fn play_random(&mut self) -> PlayerResult<Playback> {
        let stopped = self.unload();

        let mut playable: Vec<&Video> = self.catalog.playable().collect();
        playable.sort_by(|a, b| a.id.cmp(&b.id));

        let Some(video) = playable.choose(&mut self.rng).map(|v| (*v).clone()) else {
            log::debug!("Random play requested with no playable videos");
            return Err(PlayerError::NoVideosAvailable { stopped });
        };

        log::debug!("Randomly playing {:?}", video.id);
        self.cursor = Cursor::Playing(video.id.clone());

        Ok(Playback {
            stopped,
            playing: video,
        })
    }

    pub fn pause(&mut self) -> PlayerResult<Pause> {
        let video = self.current_video()?;
        if self.cursor.is_paused() {
            return Ok(Pause::AlreadyPaused(video));
        }

        log::debug!("Pausing {:?}", video.id);
        self.cursor = Cursor::Paused(video.id.clone());
        Ok(Pause::Paused(video))
    }

    pub fn continue_video(&mut self) -> PlayerResult<Video> {
        let video = self.current_video()?;
        if !self.cursor.is_paused() {
            return Err(PlayerError::NotPaused);
        }

        log::debug!("Continuing {:?}", video.id);
        self.cursor = Cursor::Playing(video.id.clone());
        Ok(video)
    }

    pub fn show_playing(&self) -> Option<NowPlaying> {
        let video = self.catalog.get_video(self.cursor.video_id()?)?;
        Some(NowPlaying {
            video: video.clone(),
            paused: self.cursor.is_paused(),
        })
    }

    // Playlists

    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<()> {
        let key = Playlist::key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::DuplicatePlaylist);
        }

        log::debug!("Creating playlist {:?}", name);
        self.playlists.insert(key, Playlist::new(name.to_string()));
        Ok(())
    }

    pub fn add_to_playlist(&mut self, playlist_name: &str, video_id: &str) -> PlayerResult<Video> {
        self.ensure_not_flagged(video_id)?;
        let playlist = self
            .playlists
            .get_mut(&Playlist::key(playlist_name))
            .ok_or(PlayerError::PlaylistNotFound)?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::VideoNotFound)?;

        if !playlist.add_video(video_id) {
            return Err(PlayerError::AlreadyAdded);
        }

        log::debug!("Added {:?} to playlist {:?}", video_id, playlist.name);
        Ok(video.clone())
    }

    pub fn remove_from_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
    ) -> PlayerResult<Video> {
        let playlist = self
            .playlists
            .get_mut(&Playlist::key(playlist_name))
            .ok_or(PlayerError::PlaylistNotFound)?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::VideoNotFound)?;

        if !playlist.remove_video(video_id) {
            return Err(PlayerError::NotInPlaylist);
        }

        log::debug!("Removed {:?} from playlist {:?}", video_id, playlist.name);
        Ok(video.clone())
    }

    pub fn clear_playlist(&mut self, playlist_name: &str) -> PlayerResult<()> {
        let playlist = self
            .playlists
            .get_mut(&Playlist::key(playlist_name))
            .ok_or(PlayerError::PlaylistNotFound)?;

        playlist.clear();
        Ok(())
    }

    pub fn delete_playlist(&mut self, playlist_name: &str) -> PlayerResult<Playlist> {
        self.playlists
            .remove(&Playlist::key(playlist_name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    /// Playlist names as created, ordered case-insensitively
    pub fn playlist_names(&self) -> Vec<String> {
        self.playlists.values().map(|p| p.name.clone()).collect()
    }

    /// Videos of a playlist in playlist order (flagged members included)
    pub fn show_playlist(&self, playlist_name: &str) -> PlayerResult<Vec<Video>> {
        let playlist = self
            .playlists
            .get(&Playlist::key(playlist_name))
            .ok_or(PlayerError::PlaylistNotFound)?;

        Ok(playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.catalog.get_video(id))
            .cloned()
            .collect())
    }

    // Search and moderation

    /// Playable videos matching `term`, sorted by title
    pub fn search(&self, kind: SearchKind, term: &str) -> SearchResults {
        let matches = self.catalog.playable().filter(|video| match kind {
            SearchKind::Title => video.title_contains(term),
            SearchKind::Tag => video.has_tag(term),
        });

        SearchResults {
            term: term.to_string(),
            videos: sorted_by_title(matches),
        }
    }

    /// Flag a video, stopping it first if it is loaded
    pub fn flag(&mut self, video_id: &str, reason: Option<&str>) -> PlayerResult<Flagged> {
        let video = self
            .catalog
            .get_video(video_id)
            .cloned()
            .ok_or(PlayerError::VideoNotFound)?;
        if self.catalog.is_flagged(video_id) {
            return Err(PlayerError::AlreadyFlagged);
        }

        let stopped = if self.cursor.video_id() == Some(video_id) {
            self.unload()
        } else {
            None
        };

        let reason = reason.unwrap_or(&self.default_flag_reason).to_string();
        log::debug!("Flagging {:?} (reason: {})", video_id, reason);
        self.catalog.flag(video_id, &reason);

        Ok(Flagged {
            video,
            reason,
            stopped,
        })
    }

    /// Clear a flag; playback is left untouched
    pub fn allow(&mut self, video_id: &str) -> PlayerResult<Video> {
        let video = self
            .catalog
            .get_video(video_id)
            .cloned()
            .ok_or(PlayerError::VideoNotFound)?;
        if !self.catalog.is_flagged(video_id) {
            return Err(PlayerError::NotFlagged);
        }

        log::debug!("Allowing {:?}", video_id);
        self.catalog.allow(video_id);
        Ok(video)
    }

    fn ensure_not_flagged(&self, video_id: &str) -> PlayerResult<()> {
        match self.catalog.flag_reason(video_id) {
            Some(reason) => Err(PlayerError::Flagged {
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Clear the cursor, returning the video that was loaded
    fn unload(&mut self) -> Option<Video> {
        let id = self.cursor.take()?;
        log::debug!("Stopping {:?}", id);
        self.catalog.get_video(&id).cloned()
    }

    /// The loaded video, playing or paused
    fn current_video(&self) -> PlayerResult<Video> {
        self.cursor
            .video_id()
            .and_then(|id| self.catalog.get_video(id))
            .cloned()
            .ok_or(PlayerError::NoVideoPlaying)
    }
}

fn sorted_by_title<'a>(videos: impl Iterator<Item = &'a Video>) -> Vec<Video> {
    let mut videos: Vec<Video> = videos.cloned().collect();
    videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
    videos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str, tags: &[&str]) -> Video {
        Video::new(id, title, tags.iter().map(|t| t.to_string()).collect())
    }

    fn sample_session() -> Session {
        let catalog = Catalog::from_videos(vec![
            video("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
            video("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            video("another_cat_video_id", "Another Cat Video", &["#cat", "#animal"]),
            video("life_at_google_video_id", "Life at Google", &["#google", "#career"]),
            video("nothing_video_id", "Video about nothing", &[]),
        ]);
        Session::with_config(catalog, &PlayerConfig::default().with_seed(7))
    }

    #[test]
    fn test_number_and_listing() {
        let session = sample_session();
        assert_eq!(session.number_of_videos(), 5);

        let titles: Vec<_> = session.all_videos().into_iter().map(|v| v.title).collect();
        assert_eq!(
            titles,
            vec![
                "Amazing Cats",
                "Another Cat Video",
                "Funny Dogs",
                "Life at Google",
                "Video about nothing"
            ]
        );
    }

    #[test]
    fn test_play_stops_previous() {
        let mut session = sample_session();

        let first = session.play("funny_dogs_video_id").unwrap();
        assert!(first.stopped.is_none());
        assert_eq!(first.playing.title, "Funny Dogs");

        session.pause().unwrap();
        let second = session.play("amazing_cats_video_id").unwrap();
        assert_eq!(second.stopped.unwrap().title, "Funny Dogs");
        assert_eq!(
            session.cursor(),
            &Cursor::Playing("amazing_cats_video_id".to_string())
        );
    }

    #[test]
    fn test_play_unknown_video() {
        let mut session = sample_session();
        session.play("funny_dogs_video_id").unwrap();

        assert_eq!(session.play("missing"), Err(PlayerError::VideoNotFound));
        assert_eq!(session.cursor().video_id(), Some("funny_dogs_video_id"));
    }

    #[test]
    fn test_play_flagged_video_keeps_cursor() {
        let mut session = sample_session();
        session.flag("amazing_cats_video_id", Some("dont_like_cats")).unwrap();
        session.play("funny_dogs_video_id").unwrap();

        assert_eq!(
            session.play("amazing_cats_video_id"),
            Err(PlayerError::Flagged {
                reason: "dont_like_cats".to_string()
            })
        );
        assert_eq!(session.cursor().video_id(), Some("funny_dogs_video_id"));
    }

    #[test]
    fn test_stop() {
        let mut session = sample_session();
        assert_eq!(session.stop(), Err(PlayerError::NoVideoPlaying));

        session.play("nothing_video_id").unwrap();
        assert_eq!(session.stop().unwrap().title, "Video about nothing");
        assert_eq!(session.cursor(), &Cursor::Empty);
        assert_eq!(session.stop(), Err(PlayerError::NoVideoPlaying));
    }

    #[test]
    fn test_pause_and_continue() {
        let mut session = sample_session();
        assert_eq!(session.pause(), Err(PlayerError::NoVideoPlaying));
        assert_eq!(session.continue_video(), Err(PlayerError::NoVideoPlaying));

        session.play("funny_dogs_video_id").unwrap();
        assert!(matches!(session.pause(), Ok(Pause::Paused(_))));
        assert!(matches!(session.pause(), Ok(Pause::AlreadyPaused(_))));
        assert!(session.show_playing().unwrap().paused);

        assert_eq!(session.continue_video().unwrap().id, "funny_dogs_video_id");
        assert_eq!(session.continue_video(), Err(PlayerError::NotPaused));
        assert_eq!(
            session.cursor(),
            &Cursor::Playing("funny_dogs_video_id".to_string())
        );
    }

    #[test]
    fn test_show_playing() {
        let mut session = sample_session();
        assert!(session.show_playing().is_none());

        session.play("life_at_google_video_id").unwrap();
        let now = session.show_playing().unwrap();
        assert_eq!(now.video.title, "Life at Google");
        assert!(!now.paused);
    }

    #[test]
    fn test_play_random_only_picks_playable() {
        let mut session = sample_session();
        for id in [
            "funny_dogs_video_id",
            "amazing_cats_video_id",
            "another_cat_video_id",
            "life_at_google_video_id",
        ] {
            session.flag(id, None).unwrap();
        }

        for _ in 0..10 {
            let playback = session.play_random().unwrap();
            assert_eq!(playback.playing.id, "nothing_video_id");
        }
    }

    #[test]
    fn test_play_random_is_reproducible_with_seed() {
        let mut a = sample_session();
        let mut b = sample_session();
        for _ in 0..5 {
            assert_eq!(
                a.play_random().unwrap().playing,
                b.play_random().unwrap().playing
            );
        }
    }

    #[test]
    fn test_play_random_with_nothing_playable_stops_current() {
        let mut session = sample_session();
        session.play("nothing_video_id").unwrap();
        for v in session.all_videos() {
            if v.id != "nothing_video_id" {
                session.flag(&v.id, None).unwrap();
            }
        }
        // Flag the loaded one last through the catalog so the cursor stays put
        session.catalog.flag("nothing_video_id", "test");

        let err = session.play_random().unwrap_err();
        match err {
            PlayerError::NoVideosAvailable { stopped } => {
                assert_eq!(stopped.unwrap().id, "nothing_video_id");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(session.cursor(), &Cursor::Empty);
    }

    #[test]
    fn test_play_random_on_empty_catalog() {
        let mut session = Session::new(Catalog::new());
        assert_eq!(
            session.play_random(),
            Err(PlayerError::NoVideosAvailable { stopped: None })
        );
    }

    #[test]
    fn test_playlist_names_are_case_insensitive() {
        let mut session = sample_session();
        session.create_playlist("My List").unwrap();

        assert_eq!(
            session.create_playlist("MY LIST"),
            Err(PlayerError::DuplicatePlaylist)
        );
        assert_eq!(session.show_playlist("my list").unwrap(), Vec::new());
        assert_eq!(session.playlist_names(), vec!["My List".to_string()]);
    }

    #[test]
    fn test_add_to_playlist_checks_in_order() {
        let mut session = sample_session();
        session.flag("amazing_cats_video_id", None).unwrap();

        // Flag check comes before the playlist check
        assert_eq!(
            session.add_to_playlist("nope", "amazing_cats_video_id"),
            Err(PlayerError::Flagged {
                reason: "Not supplied".to_string()
            })
        );
        assert_eq!(
            session.add_to_playlist("nope", "missing"),
            Err(PlayerError::PlaylistNotFound)
        );

        session.create_playlist("My List").unwrap();
        assert_eq!(
            session.add_to_playlist("my list", "missing"),
            Err(PlayerError::VideoNotFound)
        );

        let added = session.add_to_playlist("My List", "funny_dogs_video_id").unwrap();
        assert_eq!(added.title, "Funny Dogs");
        assert_eq!(
            session.add_to_playlist("MY LIST", "funny_dogs_video_id"),
            Err(PlayerError::AlreadyAdded)
        );
    }

    #[test]
    fn test_show_playlist_keeps_insertion_order() {
        let mut session = sample_session();
        session.create_playlist("mix").unwrap();
        session.add_to_playlist("mix", "life_at_google_video_id").unwrap();
        session.add_to_playlist("mix", "amazing_cats_video_id").unwrap();

        let ids: Vec<_> = session
            .show_playlist("MIX")
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["life_at_google_video_id", "amazing_cats_video_id"]);
        assert_eq!(session.show_playlist("other"), Err(PlayerError::PlaylistNotFound));
    }

    #[test]
    fn test_remove_from_playlist() {
        let mut session = sample_session();
        assert_eq!(
            session.remove_from_playlist("mix", "funny_dogs_video_id"),
            Err(PlayerError::PlaylistNotFound)
        );

        session.create_playlist("mix").unwrap();
        assert_eq!(
            session.remove_from_playlist("mix", "missing"),
            Err(PlayerError::VideoNotFound)
        );
        assert_eq!(
            session.remove_from_playlist("mix", "funny_dogs_video_id"),
            Err(PlayerError::NotInPlaylist)
        );

        session.add_to_playlist("mix", "funny_dogs_video_id").unwrap();
        let removed = session.remove_from_playlist("Mix", "funny_dogs_video_id").unwrap();
        assert_eq!(removed.id, "funny_dogs_video_id");
        assert!(session.show_playlist("mix").unwrap().is_empty());
    }

    #[test]
    fn test_clear_and_delete_playlist() {
        let mut session = sample_session();
        assert_eq!(session.clear_playlist("mix"), Err(PlayerError::PlaylistNotFound));
        assert!(session.delete_playlist("mix").is_err());

        session.create_playlist("Mix").unwrap();
        session.add_to_playlist("mix", "funny_dogs_video_id").unwrap();

        session.clear_playlist("MIX").unwrap();
        assert!(session.show_playlist("mix").unwrap().is_empty());

        let deleted = session.delete_playlist("mix").unwrap();
        assert_eq!(deleted.name, "Mix");
        assert!(session.playlist_names().is_empty());
    }

    #[test]
    fn test_playlist_names_sorted() {
        let mut session = sample_session();
        session.create_playlist("zeta").unwrap();
        session.create_playlist("Alpha").unwrap();
        session.create_playlist("beta").unwrap();

        assert_eq!(session.playlist_names(), vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_search_by_title_sorted_and_playable_only() {
        let mut session = sample_session();

        let results = session.search(SearchKind::Title, "CAT");
        let titles: Vec<_> = results.videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video"]);
        assert_eq!(results.term, "CAT");

        session.flag("amazing_cats_video_id", None).unwrap();
        let results = session.search(SearchKind::Title, "cat");
        assert_eq!(results.len(), 1);
        assert_eq!(results.get(1).unwrap().id, "another_cat_video_id");
    }

    #[test]
    fn test_search_flagged_match_is_excluded() {
        let catalog = Catalog::from_videos(vec![
            video("cat", "Cat Video", &[]),
            video("dog", "Dog Video", &[]),
        ]);
        let mut session = Session::new(catalog);
        session.flag("cat", None).unwrap();

        assert!(session.search(SearchKind::Title, "cat").is_empty());
    }

    #[test]
    fn test_search_by_tag() {
        let session = sample_session();

        let results = session.search(SearchKind::Tag, "#ANIMAL");
        assert_eq!(results.len(), 3);
        assert_eq!(results.get(1).unwrap().title, "Amazing Cats");

        assert!(session.search(SearchKind::Tag, "animal").is_empty());
    }

    #[test]
    fn test_flag_stops_loaded_video() {
        let mut session = sample_session();
        session.play("amazing_cats_video_id").unwrap();
        session.pause().unwrap();

        let flagged = session.flag("amazing_cats_video_id", None).unwrap();
        assert_eq!(flagged.reason, "Not supplied");
        assert_eq!(flagged.stopped.unwrap().id, "amazing_cats_video_id");
        assert!(session.show_playing().is_none());
    }

    #[test]
    fn test_flag_other_video_keeps_playing() {
        let mut session = sample_session();
        session.play("funny_dogs_video_id").unwrap();

        let flagged = session.flag("amazing_cats_video_id", Some("dont_like_cats")).unwrap();
        assert!(flagged.stopped.is_none());
        assert_eq!(flagged.reason, "dont_like_cats");
        assert_eq!(session.cursor().video_id(), Some("funny_dogs_video_id"));
    }

    #[test]
    fn test_flag_errors() {
        let mut session = sample_session();
        assert_eq!(session.flag("missing", None), Err(PlayerError::VideoNotFound));

        session.flag("funny_dogs_video_id", None).unwrap();
        assert_eq!(
            session.flag("funny_dogs_video_id", Some("again")),
            Err(PlayerError::AlreadyFlagged)
        );
        assert_eq!(
            session.catalog().flag_reason("funny_dogs_video_id"),
            Some("Not supplied")
        );
    }

    #[test]
    fn test_default_flag_reason_from_config() {
        let config = PlayerConfig::default().with_default_flag_reason("unspecified");
        let mut session = Session::with_config(
            Catalog::from_videos(vec![video("a", "A", &[])]),
            &config,
        );

        assert_eq!(session.flag("a", None).unwrap().reason, "unspecified");
    }

    #[test]
    fn test_allow() {
        let mut session = sample_session();
        assert_eq!(session.allow("missing"), Err(PlayerError::VideoNotFound));
        assert_eq!(
            session.allow("funny_dogs_video_id"),
            Err(PlayerError::NotFlagged)
        );

        session.flag("funny_dogs_video_id", None).unwrap();
        assert_eq!(session.allow("funny_dogs_video_id").unwrap().title, "Funny Dogs");
        assert!(session.play("funny_dogs_video_id").is_ok());
    }
}
