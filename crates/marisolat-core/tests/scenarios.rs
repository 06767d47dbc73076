//! End-to-end scenarios through `PrayerEngine`.

use chrono::{NaiveDate, NaiveDateTime};
use marisolat_core::prayer::SnapshotStatus;
use marisolat_core::qibla::ScriptedHeadingSource;
use marisolat_core::{
    qibla_bearing, Coordinates, Day, Event, PrayerEngine, PrayerLabel, QiblaTracker, RawDay,
    RawScheduleSet, Waktu, WaktuDurations,
};

fn day(subuh: &str, syuruk: &str, zohor: &str, asar: &str, maghrib: &str, isyak: &str) -> RawDay {
    RawDay {
        subuh: subuh.into(),
        syuruk: syuruk.into(),
        zohor: zohor.into(),
        asar: asar.into(),
        maghrib: maghrib.into(),
        isyak: isyak.into(),
        ..RawDay::default()
    }
}

fn standard_day() -> RawDay {
    day("5:50 AM", "7:10 AM", "1:00 PM", "4:30 PM", "7:20 PM", "8:35 PM")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 16).unwrap()
}

fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

fn engine() -> PrayerEngine {
    let raw = RawScheduleSet {
        yesterday: Some(standard_day()),
        today: Some(standard_day()),
        tomorrow: Some(standard_day()),
    };
    PrayerEngine::with_schedule(WaktuDurations::default(), raw, today())
}

#[test]
fn five_minutes_before_asar_is_tahrim() {
    let engine = engine();
    let now = at(today(), 16, 25);

    let cursor = engine.cursor(now, Day::Today).unwrap();
    assert_eq!(cursor.current.label, PrayerLabel::Zohor);
    assert_eq!(cursor.next.label, PrayerLabel::Asar);

    let waktu = engine.waktu(now, Day::Today).unwrap();
    assert_eq!(waktu.active, Waktu::Tahrim);
    assert_eq!(waktu.countdown.to_string(), "5 minit 0 saat");
}

#[test]
fn ten_minutes_after_subuh_is_fadhilat() {
    let engine = engine();
    let waktu = engine.waktu(at(today(), 6, 0), Day::Today).unwrap();
    assert_eq!(waktu.interval.label, PrayerLabel::Subuh);
    assert_eq!(waktu.interval.end, at(today(), 7, 10));
    assert_eq!(waktu.active, Waktu::Fadhilat);
    assert_eq!(waktu.countdown.to_string(), "5 minit 0 saat");
}

#[test]
fn syuruk_has_no_waktu_but_keeps_cursor() {
    let engine = engine();
    let now = at(today(), 9, 0);
    assert_eq!(
        engine.cursor(now, Day::Today).unwrap().current.label,
        PrayerLabel::Syuruk
    );
    assert!(engine.waktu(now, Day::Today).is_none());
}

#[test]
fn night_third_spans_the_day_boundary() {
    let engine = engine();
    let night = engine.night_third(Day::Today).unwrap();
    assert_eq!(night.night_minutes, 630);
    assert_eq!(night.duration_minutes, 210);
    assert_eq!(night.start, at(today(), 2, 20));
    assert_eq!(night.end, at(today(), 5, 50));
    assert_eq!(night.display(), "2:20 – 5:50");

    assert!(engine.night_third(Day::Yesterday).is_none());
}

#[test]
fn after_isyak_next_is_tomorrows_subuh() {
    let engine = engine();
    let now = at(today(), 23, 0);
    let snapshot = engine.snapshot(now, Day::Today);
    assert_eq!(snapshot.current, Some(PrayerLabel::Isyak));
    assert_eq!(snapshot.next, Some(PrayerLabel::Subuh));
    assert_eq!(
        snapshot.next_countdown.as_deref(),
        Some("6 jam 50 minit 0 saat")
    );
    // The next row belongs to tomorrow, so no row on today's list is marked next.
    assert!(snapshot.rows.iter().all(|r| !r.is_next));
    assert!(snapshot.rows[PrayerLabel::Isyak.index()].is_current);
}

#[test]
fn small_hours_belong_to_yesterdays_isyak() {
    let engine = engine();
    let now = at(today(), 3, 0);
    let cursor = engine.cursor(now, Day::Today).unwrap();
    assert_eq!(cursor.current.label, PrayerLabel::Isyak);
    assert_eq!(cursor.current.day, Day::Yesterday);
    assert_eq!(cursor.next.label, PrayerLabel::Subuh);

    let waktu = engine.waktu(now, Day::Today).unwrap();
    assert_eq!(waktu.interval.label, PrayerLabel::Isyak);
    assert_eq!(waktu.active, Waktu::Jawaz);
}

#[test]
fn yesterday_view_never_has_a_cursor() {
    let engine = engine();
    let yesterday = today().pred_opt().unwrap();
    assert!(engine.cursor(at(yesterday, 14, 0), Day::Yesterday).is_none());
    let snapshot = engine.snapshot(at(yesterday, 14, 0), Day::Yesterday);
    assert!(snapshot.is_ready());
    assert!(snapshot.waktu.is_none());
}

#[test]
fn missing_day_makes_everything_unavailable() {
    let raw = RawScheduleSet {
        yesterday: None,
        today: Some(standard_day()),
        tomorrow: Some(standard_day()),
    };
    let engine = PrayerEngine::with_schedule(WaktuDurations::default(), raw, today());
    let snapshot = engine.snapshot(at(today(), 14, 0), Day::Today);

    assert!(matches!(snapshot.status, SnapshotStatus::Unavailable { .. }));
    assert!(snapshot.current.is_none());
    assert!(snapshot.waktu.is_none());
    assert!(snapshot.night_third.is_none());
    // Today's raw times are still listed.
    assert_eq!(snapshot.rows[PrayerLabel::Zohor.index()].time, "1:00 PM");
}

#[test]
fn malformed_time_makes_classification_unavailable() {
    let mut broken = standard_day();
    broken.asar = "4.30 PM".into();
    let raw = RawScheduleSet {
        yesterday: Some(standard_day()),
        today: Some(broken),
        tomorrow: Some(standard_day()),
    };
    let mut engine = PrayerEngine::new(WaktuDurations::default());
    let event = engine.set_schedule(raw, today());

    assert!(matches!(event, Event::ScheduleUnavailable { .. }));
    let snapshot = engine.snapshot(at(today(), 14, 0), Day::Today);
    assert!(!snapshot.is_ready());
    assert_eq!(snapshot.rows[PrayerLabel::Asar.index()].time, "-");
}

#[test]
fn upstream_payload_keys_are_accepted() {
    let json = r#"{
        "yesterday": {"fajr": "05:49:00", "syuruk": "07:09:00", "dhuhr": "13:00:00", "asr": "16:29:00", "maghrib": "19:20:00", "isha": "20:35:00"},
        "today": {"fajr": "05:50:00", "syuruk": "07:10:00", "dhuhr": "13:00:00", "asr": "16:30:00", "maghrib": "19:20:00", "isha": "20:35:00",
                  "date": "16-Dec-2025", "hijri": "1447-06-25"},
        "tomorrow": {"fajr": "05:50:00", "syuruk": "07:10:00", "dhuhr": "13:01:00", "asr": "16:30:00", "maghrib": "19:21:00", "isha": "20:36:00"}
    }"#;
    let raw: RawScheduleSet = serde_json::from_str(json).unwrap();
    let engine = PrayerEngine::with_schedule(WaktuDurations::default(), raw, today());
    let snapshot = engine.snapshot(at(today(), 16, 25), Day::Today);

    assert!(snapshot.is_ready());
    assert_eq!(
        snapshot.dates,
        "16 Disember 2025 Miladi | 25 Jamadilakhir 1447 Hijri"
    );
    assert_eq!(snapshot.waktu.unwrap().active, Waktu::Tahrim);
}

#[test]
fn kuala_lumpur_qibla_and_alignment() {
    let kl = Coordinates::new(3.1390, 101.6869).unwrap();
    let bearing = qibla_bearing(kl);
    assert!((bearing - 292.0).abs() <= 1.0);

    let mut tracker = QiblaTracker::new(kl, 5.0);
    let mut source = ScriptedHeadingSource::compass([200.0, bearing - 2.0, bearing, bearing + 30.0]);
    let mut pulses = 0;
    tracker.follow(&mut source, |_, event| {
        if let Some(Event::QiblaAligned { pulse_ms, .. }) = event {
            assert_eq!(*pulse_ms, 40);
            pulses += 1;
        }
    });
    assert_eq!(pulses, 1);
    assert!(!tracker.is_aligned());
}

#[test]
fn countdown_reaches_zero_on_a_waktu_edge() {
    let engine = engine();
    let edge = engine.waktu(at(today(), 13, 15), Day::Today).unwrap();
    assert_eq!(edge.active, Waktu::Fadhilat);
    assert_eq!(edge.countdown.to_string(), "0 saat");

    let after = engine
        .waktu(at(today(), 13, 15) + chrono::Duration::seconds(1), Day::Today)
        .unwrap();
    assert_eq!(after.active, Waktu::Ikhtiar);
}

#[test]
fn stale_window_stops_reporting_today() {
    let engine = engine();
    let next_morning = at(today().succ_opt().unwrap(), 9, 0);

    assert!(engine.cursor(next_morning, Day::Today).is_none());
    let snapshot = engine.snapshot(next_morning, Day::Today);
    assert!(snapshot.current.is_none());
    assert!(snapshot.next_countdown.is_none());
    assert!(snapshot.rows.iter().all(|r| !r.is_current && !r.is_next));

    // The stored tomorrow is the live day now.
    let tomorrow = engine.snapshot(next_morning, Day::Tomorrow);
    assert_eq!(tomorrow.current, Some(PrayerLabel::Syuruk));
}
