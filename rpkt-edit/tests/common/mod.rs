#![allow(dead_code)]

use std::{fs::File, io::Read};

use rpkt_edit::ether::{parse_hex_frame, EtherType, ETHER_HEADER_LEN};
use rpkt_edit::ipv4::{IpProtocol, Ipv4Header};
use rpkt_edit::tcp::TcpHeader;
use rpkt_edit::udp::UDP_HEADER_LEN;
use rpkt_edit::vlan::{VlanFrame, VLAN_ETH_HEADER_LEN};
use rpkt_edit::{Layers, Pbuf, PktBuf};

use pnet::packet::Packet;
use smoltcp::wire::IpAddress;

pub fn file_to_packet(fname: &str) -> Pbuf {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();

    parse_hex_frame(content).unwrap()
}

/// Set all four layer markers of an Ethernet (optionally tagged) IPv4 frame
/// carrying TCP or UDP.
pub fn mark_layers(pbuf: &mut Pbuf) {
    let data = pbuf.data();
    let (l3, ethertype) = match VlanFrame::parse(data).unwrap() {
        VlanFrame::Untagged { ethertype, .. } => (ETHER_HEADER_LEN, ethertype),
        VlanFrame::Tagged {
            inner_ethertype, ..
        } => (VLAN_ETH_HEADER_LEN, inner_ethertype),
    };
    assert_eq!(ethertype, EtherType::IPV4);

    let ip = Ipv4Header::parse(&data[l3..]).unwrap();
    let l4 = l3 + ip.header_len() as usize;
    let l7 = match ip.protocol() {
        IpProtocol::TCP => l4 + TcpHeader::parse(&data[l4..]).unwrap().header_len() as usize,
        IpProtocol::UDP => l4 + UDP_HEADER_LEN,
        proto => panic!("unexpected protocol {:?}", proto),
    };

    *pbuf.layers_mut() = Layers {
        l2: Some(0),
        l3: Some(l3),
        l4: Some(l4),
        l7: Some(l7),
    };
}

pub fn load_marked(fname: &str) -> Pbuf {
    let mut pbuf = file_to_packet(fname);
    mark_layers(&mut pbuf);
    pbuf
}

/// Check the IPv4 header checksum and the TCP/UDP checksum of a marked
/// frame against smoltcp's verifier and pnet's recomputation.
pub fn assert_checksums(pbuf: &Pbuf) {
    let layers = pbuf.layers();
    let ip_bytes = &pbuf.data()[layers.l3.unwrap()..];

    let ip = smoltcp::wire::Ipv4Packet::new_checked(ip_bytes).unwrap();
    assert!(ip.verify_checksum());
    let src = IpAddress::from(ip.src_addr());
    let dst = IpAddress::from(ip.dst_addr());

    let pnet_ip = pnet::packet::ipv4::Ipv4Packet::new(ip_bytes).unwrap();
    assert_eq!(
        pnet::packet::ipv4::checksum(&pnet_ip),
        pnet_ip.get_checksum()
    );
    let (pnet_src, pnet_dst) = (pnet_ip.get_source(), pnet_ip.get_destination());

    match Ipv4Header::parse(ip_bytes).unwrap().protocol() {
        IpProtocol::TCP => {
            let tcp = smoltcp::wire::TcpPacket::new_checked(ip.payload()).unwrap();
            assert!(tcp.verify_checksum(&src, &dst));

            let pnet_tcp = pnet::packet::tcp::TcpPacket::new(pnet_ip.payload()).unwrap();
            assert_eq!(
                pnet::packet::tcp::ipv4_checksum(&pnet_tcp, &pnet_src, &pnet_dst),
                pnet_tcp.get_checksum()
            );
        }
        IpProtocol::UDP => {
            // a zero udp checksum is not verified, it means the sender
            // computed none
            let udp = smoltcp::wire::UdpPacket::new_checked(ip.payload()).unwrap();
            let stored = udp.checksum();
            if stored != 0 {
                assert!(udp.verify_checksum(&src, &dst));

                let pnet_udp = pnet::packet::udp::UdpPacket::new(pnet_ip.payload()).unwrap();
                let computed = pnet::packet::udp::ipv4_checksum(&pnet_udp, &pnet_src, &pnet_dst);
                // pnet does not replace a zero result with all-ones
                assert!(computed == stored || (computed == 0 && stored == 0xffff));
            }
        }
        proto => panic!("unexpected protocol {:?}", proto),
    }
}
