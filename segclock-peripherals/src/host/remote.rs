use std::io::Write;
use std::net::TcpListener;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;

use panel_protocol::panel::{generate_panel_packet, split_display_word};
use segclock_core::display::DisplaySegments;
use segclock_core::periph::DisplayPort;

/// Streams latched display words to an external panel viewer over TCP.
///
/// Every write becomes two panel-protocol frames (the low and high
/// register halves) handed to a forwarding thread, so the port write
/// itself never blocks on the network.
pub struct RemotePanel {
    tx: Sender<[u8; 4]>,
}

// Thread responsible for forwarding panel frames to whoever connects.
fn panel_thread(rx: Receiver<[u8; 4]>, addr: String) {
    let listener = match TcpListener::bind(addr.as_str()) {
        Ok(listener) => listener,
        Err(e) => {
            warn!("panel stream bind failed on {}: {}", addr, e);
            return;
        }
    };
    for stream in listener.incoming() {
        match stream {
            Ok(mut viewer) => loop {
                let frame = match rx.recv() {
                    Ok(frame) => frame,
                    _ => return, // driver side is gone
                };

                if viewer.write_all(&frame).is_err() {
                    break; // viewer went away, wait for the next one
                }
            },
            _ => {}
        }
    }
}

impl RemotePanel {
    pub fn new(addr: &str) -> RemotePanel {
        let (tx, rx) = unbounded();
        let addr = addr.to_string();

        // Spawn thread to handle outgoing TCP communication
        std::thread::spawn(move || panel_thread(rx, addr));
        RemotePanel { tx }
    }
}

impl DisplayPort for RemotePanel {
    fn write(&mut self, pattern: DisplaySegments) {
        for (reg, value) in split_display_word(pattern.bits()) {
            let packet = generate_panel_packet(reg, value);
            if self.tx.send(packet).is_err() {
                warn!("panel stream thread gone, dropping frame");
            }
        }
    }
}
