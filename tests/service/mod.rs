//! Tests for the aggregation service against a mock upstream server.
