use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::{Arc, Mutex};

use pnet::datalink::{Channel, Config, DataLinkReceiver, DataLinkSender, MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

pub const IFF_UP: u32 = 1;
pub const IFF_BROADCAST: u32 = 1 << 1;
pub const IFF_LOOPBACK: u32 = 1 << 3;

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

/// Frames handed to a [`RecordingSender`], in send order.
pub type Sent = Arc<Mutex<Vec<Vec<u8>>>>;

pub struct RecordingSender {
    sent: Sent,
}

impl DataLinkSender for RecordingSender {
    fn build_and_send(
        &mut self,
        _num_packets: usize,
        _packet_size: usize,
        _func: &mut dyn for<'a> FnMut(&'a mut [u8]),
    ) -> Option<io::Result<()>> {
        Some(Ok(()))
    }

    fn send_to(&mut self, packet: &[u8], _dst: Option<NetworkInterface>) -> Option<io::Result<()>> {
        self.sent.lock().unwrap().push(packet.to_vec());
        Some(Ok(()))
    }
}

pub struct SilentReceiver;

impl DataLinkReceiver for SilentReceiver {
    fn next(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::TimedOut, "nothing to read"))
    }
}

/// A channel opener that records every frame into the returned [`Sent`].
pub fn recording_opener() -> (impl FnOnce(&NetworkInterface, Config) -> io::Result<Channel>, Sent) {
    let sent: Sent = Arc::new(Mutex::new(Vec::new()));
    let handle = sent.clone();
    let opener = move |_: &NetworkInterface, _: Config| -> io::Result<Channel> {
        Ok(Channel::Ethernet(Box::new(RecordingSender { sent: handle }), Box::new(SilentReceiver)))
    };
    (opener, sent)
}
