#![allow(unused_imports)]

mod builders;
mod dns_server_mock;
mod mock_transport;

pub use builders::{ResponseBuilder, QUESTION_NAME_OFFSET};
pub use dns_server_mock::{MockDnsServer, MockReply};
pub use mock_transport::MockTransport;
