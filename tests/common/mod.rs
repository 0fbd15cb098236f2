//! Common test utilities shared across integration tests.

use serde_json::{Value, json};
use thehive_client::{Client, Config};
use wiremock::MockServer;

/// Start a mock TheHive server and a client pointed at it
pub async fn mock_client() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(&Config::new(server.uri(), "test-apikey")).unwrap();

    (server, client)
}

/// A server-side alert body with every required output field set
pub fn sample_alert_json() -> Value {
    json!({
        "_id": "~40964136",
        "_type": "Alert",
        "_createdBy": "analyst@thehive.local",
        "_createdAt": 1717000000000i64,
        "type": "external",
        "source": "suricata",
        "sourceRef": "evt-1042",
        "title": "Suspicious outbound traffic",
        "description": "Beaconing to a known C2 address",
        "severity": 2,
        "date": 1717000000000i64,
        "tags": ["c2", "network"],
        "tlp": 2,
        "pap": 2,
        "follow": true,
        "observableCount": 1,
        "status": "New",
        "stage": "New",
    })
}

/// A server-side case body, as returned by promote and merge operations
pub fn sample_case_json() -> Value {
    json!({
        "_id": "~8208",
        "_type": "Case",
        "_createdBy": "analyst@thehive.local",
        "_createdAt": 1717000001000i64,
        "number": 31,
        "title": "[ALERT] Suspicious outbound traffic",
        "description": "Beaconing to a known C2 address",
        "severity": 2,
        "startDate": 1717000001000i64,
        "flag": false,
        "tlp": 2,
        "pap": 2,
        "status": "New",
        "stage": "New",
        "assignee": "analyst@thehive.local",
    })
}

/// A server-side observable body
pub fn sample_observable_json() -> Value {
    json!({
        "_id": "~12344",
        "_type": "Observable",
        "_createdBy": "analyst@thehive.local",
        "_createdAt": 1717000002000i64,
        "dataType": "ip",
        "data": "198.51.100.7",
        "startDate": 1717000002000i64,
        "tlp": 2,
        "pap": 2,
        "ioc": true,
        "sighted": false,
        "tags": ["c2"],
    })
}
