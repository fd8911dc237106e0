use segclock_core::display::DisplaySegments;
use segclock_core::periph::DisplayPort;

use crate::render;

/// Draws the panel image on stdout. Redraws only when the latched word
/// actually changes, the way the hardware latch behaves.
pub struct ConsolePanel {
    last: Option<DisplaySegments>,
}

impl ConsolePanel {
    pub fn new() -> ConsolePanel {
        ConsolePanel { last: None }
    }
}

impl DisplayPort for ConsolePanel {
    fn write(&mut self, pattern: DisplaySegments) {
        if self.last == Some(pattern) {
            return;
        }
        self.last = Some(pattern);

        let image = render::render(pattern);
        println!();
        for row in image.rows.iter() {
            println!("{}", row);
        }
        println!("{:>15}", image.meridiem);
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use segclock_core::tod::{Meridiem, TimeOfDay};

    #[test]
    fn latches_the_last_written_word() {
        let tod = TimeOfDay {
            day_seconds: 0,
            hour: 12,
            minute: 0,
            second: 0,
            meridiem: Meridiem::Am,
        };
        let pattern = segclock_core::display::encode(&tod).unwrap();

        let mut panel = ConsolePanel::new();
        panel.write(pattern);
        panel.write(pattern); // second write is a no-op redraw
        assert_eq!(panel.last, Some(pattern));
    }
}
