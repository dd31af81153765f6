#[doc(hidden)]
#[macro_export]
macro_rules! time {
    ($label:literal, $($token:tt)*) => ({
        let start = std::time::Instant::now();
        let value = { $($token)* };
        println!("{} time: {}ms", $label, start.elapsed().as_millis());
        value
    });
}

pub use time;
