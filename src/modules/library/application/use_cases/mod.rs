pub mod add_viewing_record;
pub mod complete_episode;
pub mod create_episode;
pub mod create_series;
pub mod create_title;
pub mod delete_episode;
pub mod delete_series;
pub mod delete_title;
pub mod delete_viewing_record;
pub mod get_all_titles;
pub mod get_episode_detail;
pub mod get_title_detail;
pub mod get_viewing_records;
pub mod search_titles;
pub mod update_episode;
pub mod update_series;
pub mod update_title;

pub use add_viewing_record::{AddViewingRecordCommand, AddViewingRecordHandler};
pub use complete_episode::{CompleteEpisodeCommand, CompleteEpisodeHandler};
pub use create_episode::{CreateEpisodeCommand, CreateEpisodeHandler};
pub use create_series::{CreateSeriesCommand, CreateSeriesHandler};
pub use create_title::{CreateTitleCommand, CreateTitleHandler};
pub use delete_episode::{DeleteEpisodeCommand, DeleteEpisodeHandler};
pub use delete_series::{DeleteSeriesCommand, DeleteSeriesHandler};
pub use delete_title::{DeleteTitleCommand, DeleteTitleHandler};
pub use delete_viewing_record::{DeleteViewingRecordCommand, DeleteViewingRecordHandler};
pub use get_all_titles::{GetAllTitlesHandler, GetAllTitlesQuery};
pub use get_episode_detail::{GetEpisodeDetailHandler, GetEpisodeDetailQuery};
pub use get_title_detail::{GetTitleDetailHandler, GetTitleDetailQuery};
pub use get_viewing_records::{GetViewingRecordsHandler, GetViewingRecordsQuery};
pub use search_titles::{SearchTitlesHandler, SearchTitlesQuery};
pub use update_episode::{UpdateEpisodeCommand, UpdateEpisodeHandler};
pub use update_series::{UpdateSeriesCommand, UpdateSeriesHandler};
pub use update_title::{UpdateTitleCommand, UpdateTitleHandler};
