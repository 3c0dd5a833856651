use civiltime::{CalendarDate, DatePiece, Duration, Instant, TimePiece};

fn main() {
    let now = Instant::now();
    println!("It is {} in UTC", now);
    println!("That is epoch millisecond {}", now.to_epoch_ms());

    let today = CalendarDate::today();
    println!("Today is {}, a {:?}, day {} of the year", today, today.weekday(), today.yearday());

    if today.is_weekend() {
        println!("Enjoy the weekend!");
    }

    let in_an_hour = now + Duration::of_hours(1).unwrap();
    println!("In an hour it will be {:02}:{:02}", in_an_hour.hour(), in_an_hour.minute());
}
