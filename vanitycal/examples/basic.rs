use jiff::civil::date;
use vanitycal::{AnchorDate, AnchorEvent, AnniversaryPattern, Calendar, Clock};

fn main() {
    let wedding = AnchorEvent::new("Wedding", AnchorDate::Full(date(2015, 6, 20)))
        .unwrap()
        .with_description("Paris");
    let trip = AnchorEvent::new("Trip", AnchorDate::Full(date(2027, 3, 1))).unwrap();
    let birthday = AnchorEvent::new("Mum", AnchorDate::MonthDay { month: 4, day: 2 }).unwrap();

    let calendar = Calendar::new(vec![wedding, trip, birthday])
        .with_pattern(AnniversaryPattern::new(vec![0, 1000], vec![6], vec![1, 10]));
    let clock = Clock::system();

    for occ in calendar.occurrences(&clock).unwrap() {
        println!("{}  {}", occ.date, occ.summary());
    }
}
