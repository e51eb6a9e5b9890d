use vicinity::transport::{MockTransceiver, Transceiver};
use vicinity::Error;

#[test]
fn responses_come_back_in_queue_order() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0x00, 0x01]);
    mock.push_response(vec![0x00, 0x02]);

    assert_eq!(mock.transceive(&[0xAA]).unwrap(), vec![0x00, 0x01]);
    assert_eq!(mock.transceive(&[0xBB]).unwrap(), vec![0x00, 0x02]);
}

#[test]
fn exhausted_queue_reports_timeout() {
    let mut mock = MockTransceiver::new();
    assert!(matches!(mock.transceive(&[0x01]), Err(Error::Timeout)));
}

#[test]
fn every_frame_lands_in_the_sent_log() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0x00]);

    let _ = mock.transceive(&[0x01, 0x02]);
    let _ = mock.transceive(&[0x03]); // times out, still recorded

    assert_eq!(mock.sent, vec![vec![0x01, 0x02], vec![0x03]]);
    assert_eq!(mock.pop_sent().unwrap(), vec![0x03]);
}

#[test]
fn connect_failure_budget_counts_down() {
    let mut mock = MockTransceiver::disconnected();
    mock.set_connect_failures(2);

    assert!(matches!(mock.connect(), Err(Error::ConnectFailed)));
    assert!(matches!(mock.connect(), Err(Error::ConnectFailed)));
    mock.connect().unwrap();
    assert!(mock.is_connected());
}

#[test]
fn close_takes_the_link_down() {
    let mut mock = MockTransceiver::new();
    assert!(mock.is_connected());

    mock.close().unwrap();
    assert!(!mock.is_connected());
}

#[test]
fn works_as_a_boxed_trait_object() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0x00, 0xFF]);

    let mut boxed: Box<dyn Transceiver> = Box::new(mock);
    assert!(boxed.is_connected());
    assert_eq!(boxed.transceive(&[0x22, 0x2B]).unwrap(), vec![0x00, 0xFF]);
}
