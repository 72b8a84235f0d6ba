pub mod header;
pub mod message_builder;
pub mod name_codec;
pub mod response_parser;

pub use header::{rcode_to_status, DnsHeader, HEADER_LEN};
pub use message_builder::MessageBuilder;
pub use name_codec::{decode_name, encode_name, MAX_POINTER_JUMPS};
pub use response_parser::{ParsedResponse, ResponseParser};
