#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{NaiveDate, TimeZone, Utc};
use lunisolar::zone::TzfResolver;
use lunisolar::{
    date_time_lunar_phase_at_or_after, date_time_new_moon_at_or_after, hours_of_daylight, moon_illumination_at,
    solstices, sunrise, sunset, Location, LunarPhase, SolarElevation, SolarEventResult, SunriseOptions,
};

fn describe<T: core::fmt::Display>(label: &str, result: SolarEventResult<T>) {
    match result {
        SolarEventResult::Occurs(instant) => println!("  {label:<14} {instant}"),
        SolarEventResult::AllDay => println!("  {label:<14} (sun stays up)"),
        SolarEventResult::AllNight => println!("  {label:<14} (sun stays down)"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sydney = Location::new(151.2067, -33.856, 58.0)?;
    let date = NaiveDate::from_ymd_opt(2019, 12, 4).ok_or("invalid date")?;
    let resolver = TzfResolver;

    println!("Sydney, {date}");
    println!("{:=<60}", "");

    let levels = [
        ("Sunrise", SolarElevation::Geometric),
        ("Civil dawn", SolarElevation::Civil),
        ("Nautical dawn", SolarElevation::Nautical),
    ];
    for (label, level) in levels {
        let options = SunriseOptions::with_solar_elevation(level);
        describe(label, sunrise(&resolver, &sydney, date, &options)?);
    }
    describe("Sunset", sunset(&resolver, &sydney, date, &SunriseOptions::default())?);
    println!(
        "  {:<14} {:.2} h",
        "Daylight",
        hours_of_daylight(&sydney, date, &SunriseOptions::default())?
    );
    println!();

    let (june, december) = solstices(2019)?;
    println!("Solstices 2019 (UTC)");
    println!("  June           {june}");
    println!("  December       {december}");
    println!();

    let start = Utc.with_ymd_and_hms(2019, 12, 4, 0, 0, 0).unwrap();
    println!("Moon after {start}");
    println!("  Illuminated    {:.1}%", moon_illumination_at(&start) * 100.0);
    println!("  New moon       {}", date_time_new_moon_at_or_after(&start)?);
    for phase in [LunarPhase::FirstQuarter, LunarPhase::Full, LunarPhase::LastQuarter] {
        let label = format!("{phase:?}");
        println!("  {label:<14} {}", date_time_lunar_phase_at_or_after(phase, &start)?);
    }

    Ok(())
}
