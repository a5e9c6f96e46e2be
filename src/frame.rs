//! RESP request-frame encoding.
//!
//! A request is a length-prefixed array of bulk strings: `*<n>\r\n`
//! followed by one `$<len>\r\n<data>\r\n` element per argument, command
//! name first. Only the request direction is implemented; the benchmark
//! never decodes what comes back.

use bytes::BytesMut;

/// Encode a command and its arguments into an existing buffer.
///
/// Arguments are binary-safe; the bulk-string framing carries their
/// length, so no escaping is performed.
pub fn encode_command(buf: &mut BytesMut, cmd: &str, args: &[&[u8]]) {
    buf.extend_from_slice(b"*");
    buf.extend_from_slice((args.len() + 1).to_string().as_bytes());
    buf.extend_from_slice(b"\r\n");
    encode_bulk(buf, cmd.as_bytes());
    for arg in args {
        encode_bulk(buf, arg);
    }
}

/// Encode one bulk string: $<len>\r\n<data>\r\n
fn encode_bulk(buf: &mut BytesMut, data: &[u8]) {
    buf.extend_from_slice(b"$");
    buf.extend_from_slice(data.len().to_string().as_bytes());
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(data);
    buf.extend_from_slice(b"\r\n");
}

/// The fixed request frame sent on every benchmark iteration.
pub fn ping_request() -> BytesMut {
    let mut buf = BytesMut::with_capacity(14);
    encode_command(&mut buf, "PING", &[]);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_request_wire_format() {
        assert_eq!(&ping_request()[..], b"*1\r\n$4\r\nPING\r\n");
    }

    #[test]
    fn test_encode_command_no_args() {
        let mut buf = BytesMut::new();
        encode_command(&mut buf, "PING", &[]);
        assert_eq!(&buf[..], b"*1\r\n$4\r\nPING\r\n");
    }

    #[test]
    fn test_encode_command_with_args() {
        let mut buf = BytesMut::new();
        encode_command(&mut buf, "SET", &[b"key", b"value"]);
        assert_eq!(&buf[..], b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n");
    }

    #[test]
    fn test_encode_command_binary_arg() {
        let mut buf = BytesMut::new();
        encode_command(&mut buf, "SET", &[b"k", &[0u8, 13, 10, 255]]);
        assert_eq!(
            &buf[..],
            b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$4\r\n\x00\x0d\x0a\xff\r\n"
        );
    }

    #[test]
    fn test_encode_command_empty_arg() {
        let mut buf = BytesMut::new();
        encode_command(&mut buf, "SET", &[b"k", b""]);
        assert_eq!(&buf[..], b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$0\r\n\r\n");
    }

    #[test]
    fn test_encode_appends_to_existing_buffer() {
        let mut buf = BytesMut::new();
        encode_command(&mut buf, "PING", &[]);
        encode_command(&mut buf, "PING", &[]);
        assert_eq!(&buf[..], b"*1\r\n$4\r\nPING\r\n*1\r\n$4\r\nPING\r\n");
    }
}
