use chrono::Utc;
use qtty::Degrees;
use sidereal_clock::{CivilDateTime, JulianDate, SiderealTime};

fn main() {
    let civil = CivilDateTime::from_utc(Utc::now());
    let jd = JulianDate::from_civil(&civil);
    let gst = SiderealTime::greenwich(jd, civil.time_of_day());
    let lst = SiderealTime::local(gst, Degrees::new(-17.88));

    println!("UTC: {civil}");
    println!("JD: {jd:.5}");
    println!("GST: {gst}");
    println!("LST (17.88° W): {lst}");
}
