pub mod ids;
pub mod result;
pub mod song;

pub use ids::{ClusterId, SongIndex};
pub use result::{ResultRecord, Suggestion};
pub use song::{AudioFeatures, OriginalValues, SongRecord, FEATURE_COUNT};
