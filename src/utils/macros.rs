/// A [`ClockTime`](crate::time::ClockTime) literal, checked at compile time.
///
/// ```
/// use week_sheet::clock_time;
///
/// assert_eq!(clock_time!(08:30).to_string(), "08:30");
/// ```
#[macro_export]
macro_rules! clock_time {
    ( $hour:literal : $minute:literal ) => {{
        $crate::__private::const_assert!($hour < 24);
        $crate::__private::const_assert!($minute < 60);

        $crate::time::ClockTime::from_hm($hour, $minute)
    }};
}

/// A [`WeekSchedule`](crate::schedule::WeekSchedule) literal, days that are
/// not listed stay empty. Either side of a day can be left out with `_`.
#[macro_export]
macro_rules! week_schedule {
    (@time _) => { ::core::option::Option::None };
    (@time $time:literal) => {
        ::core::option::Option::Some(
            $time
                .parse::<$crate::time::ClockTime>()
                .expect("invalid time in week_schedule!"),
        )
    };
    ( $( $day:ident => ( $clock_in:tt , $clock_out:tt ) ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut schedule = $crate::schedule::WeekSchedule::empty();

        $(
            schedule = schedule.with_entry(
                $crate::time::WeekDay::$day,
                $crate::schedule::DayEntry::new(
                    $crate::week_schedule!(@time $clock_in),
                    $crate::week_schedule!(@time $clock_out),
                ),
            );
        )*

        schedule
    }};
}
