//! Single-threaded receive loop.
//!
//! One datagram is drained per iteration and decoded to completion before
//! the stop flag is re-checked. A decode failure is reported to the sink
//! and the loop continues; a socket failure ends the loop.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::protocol::{DecodeError, Message, TimeTag, dispatch};
use crate::source::{DatagramSource, SourceError};

/// Consumer of decoded traffic.
///
/// `on_message` receives leaf messages in decode order, each with its
/// effective timetag. Anything the sink needs to keep must be copied out;
/// the message is dropped once the call returns.
pub trait MessageSink {
    fn on_message(&mut self, timetag: TimeTag, message: &Message);

    /// One datagram failed to decode. The loop moves on to the next.
    fn on_decode_error(&mut self, error: &DecodeError);
}

/// Run until `stop` is observed or the source fails.
///
/// The stop flag is re-checked at least once per source timeout interval,
/// which bounds shutdown latency even with no traffic. Decode errors never
/// stop the loop; a source error is returned to the caller for reporting.
pub fn run<S, K>(source: &mut S, sink: &mut K, stop: &AtomicBool) -> Result<(), SourceError>
where
    S: DatagramSource,
    K: MessageSink,
{
    while !stop.load(Ordering::SeqCst) {
        let Some(datagram) = source.recv_datagram()? else {
            continue;
        };
        match dispatch(&datagram) {
            Ok(packet) => {
                for (timetag, message) in &packet {
                    sink.on_message(*timetag, message);
                }
            }
            Err(err) => sink.on_decode_error(&err),
        }
    }
    Ok(())
}
