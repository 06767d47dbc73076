mod countdown;
mod dates;
mod parser;

pub use countdown::{format_countdown, Countdown};
pub use dates::{format_gregorian, format_hijri, format_prayer_dates, parse_gregorian};
pub use parser::{
    format_raw_time, format_time_12h, format_time_24h, parse_time_of_day, parse_time_on,
};
