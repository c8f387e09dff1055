use std::net::Ipv4Addr;

/// Synthetic MAC for a NIC that only exposes an IPv4 address.
pub fn mac_from_ip(ip: &str) -> String {
    match ip.trim().parse::<Ipv4Addr>() {
        Ok(addr) => {
            let o = addr.octets();
            format!("00:22:{:02x}:{:02x}:{:02x}:{:02x}", o[0], o[1], o[2], o[3])
        }
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_from_ip() {
        assert_eq!(mac_from_ip("10.0.0.4"), "00:22:0a:00:00:04");
        assert_eq!(mac_from_ip("192.168.1.255"), "00:22:c0:a8:01:ff");
    }

    #[test]
    fn test_mac_from_invalid_ip() {
        assert_eq!(mac_from_ip("not-an-ip"), "");
        assert_eq!(mac_from_ip(""), "");
    }
}
