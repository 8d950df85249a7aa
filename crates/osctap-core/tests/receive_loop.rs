use std::net::UdpSocket;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use osctap_core::{
    Argument, Bundle, DecodeError, Element, Message, MessageSink, TimeTag, UdpSource,
    encode_bundle, encode_message, run,
};

struct ChannelSink {
    messages: mpsc::Sender<(TimeTag, Message)>,
    errors: mpsc::Sender<String>,
}

impl MessageSink for ChannelSink {
    fn on_message(&mut self, timetag: TimeTag, message: &Message) {
        let _ = self.messages.send((timetag, message.clone()));
    }

    fn on_decode_error(&mut self, error: &DecodeError) {
        let _ = self.errors.send(error.to_string());
    }
}

#[test]
fn live_socket_end_to_end() {
    let mut source = UdpSource::bind(0, Duration::from_millis(50)).expect("bind");
    let port = source.local_addr().expect("local addr").port();

    let (message_tx, message_rx) = mpsc::channel();
    let (error_tx, error_rx) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));

    let loop_stop = Arc::clone(&stop);
    let handle = thread::spawn(move || {
        let mut sink = ChannelSink {
            messages: message_tx,
            errors: error_tx,
        };
        run(&mut source, &mut sink, &loop_stop)
    });

    let sender = UdpSocket::bind("127.0.0.1:0").expect("sender bind");
    let target = ("127.0.0.1", port);

    // One malformed datagram, then a bare message, then a nested bundle.
    sender.send_to(b"not osc at all", target).expect("send");
    let bare = encode_message("/fader", "f", &[Argument::Float32(0.5)]).expect("encode");
    sender.send_to(&bare, target).expect("send");
    let bundle = Bundle {
        timetag: TimeTag::from_parts(10, 0),
        elements: vec![Element::Message(Message {
            address: "/led".to_string(),
            type_tags: "T".to_string(),
            arguments: vec![Argument::True],
        })],
    };
    sender
        .send_to(&encode_bundle(&bundle).expect("encode"), target)
        .expect("send");

    let wait = Duration::from_secs(5);
    let error = error_rx.recv_timeout(wait).expect("decode error");
    assert!(error.contains("unterminated string"));

    let (timetag, message) = message_rx.recv_timeout(wait).expect("bare message");
    assert!(timetag.is_immediate());
    assert_eq!(message.address, "/fader");

    let (timetag, message) = message_rx.recv_timeout(wait).expect("bundled message");
    assert_eq!(timetag, TimeTag::from_parts(10, 0));
    assert_eq!(message.address, "/led");
    assert_eq!(message.arguments, vec![Argument::True]);

    stop.store(true, Ordering::SeqCst);
    handle.join().expect("join").expect("loop result");
}
