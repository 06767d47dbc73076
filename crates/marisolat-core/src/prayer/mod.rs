mod cursor;
mod engine;
mod night;
mod waktu;
mod watch;

pub use cursor::{locate, Cursor, Moment};
pub use engine::{
    NightThirdView, PrayerEngine, PrayerRow, PrayerSnapshot, SnapshotStatus, WaktuRangeView,
    WaktuView,
};
pub use night::NightThird;
pub use waktu::{
    Classification, PrayerInterval, Waktu, WaktuClassifier, WaktuDurations, WaktuRange,
    MAX_EDGE_MIN,
};
pub use watch::{Ticker, Watcher};
