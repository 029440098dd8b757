//! Row ↔ aggregate conversion and the shared load/insert/delete steps the
//! repository implementations compose inside their transactions. Children
//! are fetched with batched `eq_any` lookups and grouped in memory.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::modules::library::domain::entities::{Episode, Series, ViewingRecord};
use crate::modules::library::domain::value_objects::WatchPageUrl;
use crate::schema::{episodes, series, viewing_records, watch_page_urls};
use crate::shared::errors::AppResult;

use super::models::{
    EpisodeModel, NewEpisode, NewSeries, NewViewingRecord, NewWatchPageUrl, SeriesModel,
    ViewingRecordModel, WatchPageUrlModel,
};

// ------------------------------------------------------------------
// Model → domain
// ------------------------------------------------------------------

pub(crate) fn record_to_domain(model: ViewingRecordModel) -> AppResult<ViewingRecord> {
    ViewingRecord::new(
        model.id,
        model.episode_id,
        model.watched_at,
        model.rating,
        model.comment,
        model.recorded_at,
    )
}

pub(crate) fn url_to_domain(model: WatchPageUrlModel) -> AppResult<WatchPageUrl> {
    WatchPageUrl::with_platform(model.url, model.platform)
}

pub(crate) fn episode_to_domain(
    model: EpisodeModel,
    urls: Vec<WatchPageUrl>,
    records: Vec<ViewingRecord>,
) -> AppResult<Episode> {
    Episode::new(
        model.id,
        model.series_id,
        model.episode_info,
        urls,
        model.watch_status,
        records,
        model.created_at,
        model.updated_at,
    )
}

// ------------------------------------------------------------------
// Domain → insert rows
// ------------------------------------------------------------------

pub(crate) fn new_episode(episode: &Episode) -> NewEpisode {
    NewEpisode {
        id: episode.id(),
        series_id: episode.series_id(),
        episode_info: episode.episode_info().to_string(),
        watch_status: episode.watch_status(),
        created_at: episode.created_at(),
        updated_at: episode.updated_at(),
    }
}

pub(crate) fn new_series(series: &Series) -> NewSeries {
    NewSeries {
        id: series.id(),
        title_id: series.title_id(),
        name: series.name().to_string(),
        created_at: series.created_at(),
        updated_at: series.updated_at(),
    }
}

pub(crate) fn new_viewing_record(record: &ViewingRecord) -> NewViewingRecord {
    NewViewingRecord {
        id: record.id(),
        episode_id: record.episode_id(),
        watched_at: record.watched_at(),
        rating: record.rating(),
        comment: record.comment().map(str::to_string),
        recorded_at: record.recorded_at(),
    }
}

// ------------------------------------------------------------------
// Batched loads
// ------------------------------------------------------------------

pub(crate) fn load_episodes_by_series_ids(
    conn: &mut PgConnection,
    series_ids: &[i64],
) -> AppResult<HashMap<i64, Vec<Episode>>> {
    if series_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let episode_models = episodes::table
        .filter(episodes::series_id.eq_any(series_ids.to_vec()))
        .order((episodes::series_id.asc(), episodes::id.asc()))
        .load::<EpisodeModel>(conn)?;
    let episode_ids: Vec<i64> = episode_models.iter().map(|e| e.id).collect();

    let mut urls_by_episode: HashMap<i64, Vec<WatchPageUrl>> = HashMap::new();
    let url_models = watch_page_urls::table
        .filter(watch_page_urls::episode_id.eq_any(episode_ids.clone()))
        .order(watch_page_urls::id.asc())
        .load::<WatchPageUrlModel>(conn)?;
    for model in url_models {
        let episode_id = model.episode_id;
        urls_by_episode
            .entry(episode_id)
            .or_default()
            .push(url_to_domain(model)?);
    }

    let mut records_by_episode: HashMap<i64, Vec<ViewingRecord>> = HashMap::new();
    let record_models = viewing_records::table
        .filter(viewing_records::episode_id.eq_any(episode_ids))
        .order((
            viewing_records::episode_id.asc(),
            viewing_records::recorded_at.desc(),
        ))
        .load::<ViewingRecordModel>(conn)?;
    for model in record_models {
        let episode_id = model.episode_id;
        records_by_episode
            .entry(episode_id)
            .or_default()
            .push(record_to_domain(model)?);
    }

    let mut grouped: HashMap<i64, Vec<Episode>> = HashMap::new();
    for model in episode_models {
        let urls = urls_by_episode.remove(&model.id).unwrap_or_default();
        let records = records_by_episode.remove(&model.id).unwrap_or_default();
        let series_id = model.series_id;
        grouped
            .entry(series_id)
            .or_default()
            .push(episode_to_domain(model, urls, records)?);
    }
    Ok(grouped)
}

pub(crate) fn load_series_by_title_ids(
    conn: &mut PgConnection,
    title_ids: &[i64],
) -> AppResult<HashMap<i64, Vec<Series>>> {
    if title_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let series_models = series::table
        .filter(series::title_id.eq_any(title_ids.to_vec()))
        .order((series::title_id.asc(), series::id.asc()))
        .load::<SeriesModel>(conn)?;
    let series_ids: Vec<i64> = series_models.iter().map(|s| s.id).collect();

    let mut episodes_by_series = load_episodes_by_series_ids(conn, &series_ids)?;

    let mut grouped: HashMap<i64, Vec<Series>> = HashMap::new();
    for model in series_models {
        let episodes = episodes_by_series.remove(&model.id).unwrap_or_default();
        grouped.entry(model.title_id).or_default().push(Series::new(
            model.id,
            model.title_id,
            model.name,
            episodes,
            model.created_at,
            model.updated_at,
        )?);
    }
    Ok(grouped)
}

// ------------------------------------------------------------------
// Inserts
// ------------------------------------------------------------------

pub(crate) fn insert_episode_graph(conn: &mut PgConnection, episode: &Episode) -> AppResult<()> {
    diesel::insert_into(episodes::table)
        .values(new_episode(episode))
        .execute(conn)?;
    insert_watch_page_urls(conn, episode)?;
    insert_missing_viewing_records(conn, episode)?;
    Ok(())
}

pub(crate) fn insert_series_graph(conn: &mut PgConnection, series: &Series) -> AppResult<()> {
    diesel::insert_into(series::table)
        .values(new_series(series))
        .execute(conn)?;
    for episode in series.episodes() {
        insert_episode_graph(conn, episode)?;
    }
    Ok(())
}

pub(crate) fn insert_watch_page_urls(conn: &mut PgConnection, episode: &Episode) -> AppResult<()> {
    let rows: Vec<NewWatchPageUrl> = episode
        .watch_page_urls()
        .iter()
        .map(|url| NewWatchPageUrl {
            episode_id: episode.id(),
            url: url.url().to_string(),
            platform: url.platform().map(str::to_string),
        })
        .collect();
    if !rows.is_empty() {
        diesel::insert_into(watch_page_urls::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

pub(crate) fn replace_watch_page_urls(conn: &mut PgConnection, episode: &Episode) -> AppResult<()> {
    diesel::delete(watch_page_urls::table.filter(watch_page_urls::episode_id.eq(episode.id())))
        .execute(conn)?;
    insert_watch_page_urls(conn, episode)
}

/// Viewing records are immutable; persisting an episode only inserts the
/// ones not stored yet. Deletions go through the record repository.
pub(crate) fn insert_missing_viewing_records(
    conn: &mut PgConnection,
    episode: &Episode,
) -> AppResult<()> {
    let ids: Vec<i64> = episode.viewing_records().iter().map(|r| r.id()).collect();
    if ids.is_empty() {
        return Ok(());
    }

    let existing: Vec<i64> = viewing_records::table
        .filter(viewing_records::id.eq_any(ids))
        .select(viewing_records::id)
        .load(conn)?;

    let rows: Vec<NewViewingRecord> = episode
        .viewing_records()
        .iter()
        .filter(|record| !existing.contains(&record.id()))
        .map(new_viewing_record)
        .collect();
    if !rows.is_empty() {
        diesel::insert_into(viewing_records::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

// ------------------------------------------------------------------
// Cascades (children first, caller provides the transaction)
// ------------------------------------------------------------------

pub(crate) fn delete_episode_graphs(
    conn: &mut PgConnection,
    episode_ids: &[i64],
) -> AppResult<()> {
    if episode_ids.is_empty() {
        return Ok(());
    }
    diesel::delete(
        viewing_records::table.filter(viewing_records::episode_id.eq_any(episode_ids.to_vec())),
    )
    .execute(conn)?;
    diesel::delete(
        watch_page_urls::table.filter(watch_page_urls::episode_id.eq_any(episode_ids.to_vec())),
    )
    .execute(conn)?;
    diesel::delete(episodes::table.filter(episodes::id.eq_any(episode_ids.to_vec())))
        .execute(conn)?;
    Ok(())
}

pub(crate) fn delete_series_graphs(conn: &mut PgConnection, series_ids: &[i64]) -> AppResult<()> {
    if series_ids.is_empty() {
        return Ok(());
    }
    let episode_ids: Vec<i64> = episodes::table
        .filter(episodes::series_id.eq_any(series_ids.to_vec()))
        .select(episodes::id)
        .load(conn)?;
    delete_episode_graphs(conn, &episode_ids)?;
    diesel::delete(series::table.filter(series::id.eq_any(series_ids.to_vec()))).execute(conn)?;
    Ok(())
}
