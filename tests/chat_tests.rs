mod common;

use common::client;
use evolution_client::types::chat::{
    ArchiveChatRequest, ArchiveChatResponse, Base64MediaRequest, Base64MediaResponse,
    BlockStatus, BlockStatusRequest, ContactRecord, DeleteMessageRequest, FindRequest,
    LastMessage, MarkAsReadRequest, MarkChatUnreadRequest, MarkChatUnreadResponse,
    MessageStatusRecord, NumberRequest, SendPresenceRequest, UpdateMessageRequest,
    WhatsappNumbersRequest,
};
use evolution_client::types::profile::{
    BusinessProfile, PrivacySettings, Profile, UpdateProfileNameRequest,
    UpdateProfilePictureRequest, UpdateProfileStatusRequest, Visibility,
};
use evolution_client::types::MessageKey;
use evolution_client::Error;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHAT_JID: &str = "5511999999999@s.whatsapp.net";

#[tokio::test]
async fn test_whatsapp_numbers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/whatsappNumbers/inst-1"))
        .and(body_json(json!({"numbers": ["5511999999999", "5511000000000"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"exists": true, "jid": "5511999999999@s.whatsapp.net", "number": "5511999999999"},
            {"exists": false, "jid": "5511000000000@s.whatsapp.net", "number": "5511000000000"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let numbers = client(&mock_server)
        .chat()
        .whatsapp_numbers(
            "inst-1",
            &WhatsappNumbersRequest::new(["5511999999999", "5511000000000"]),
        )
        .await
        .unwrap();

    assert!(numbers[0].exists);
    assert!(!numbers[1].exists);
}

#[tokio::test]
async fn test_whatsapp_numbers_requires_numbers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let empty: [&str; 0] = [];
    let err = client(&mock_server)
        .chat()
        .whatsapp_numbers("inst-1", &WhatsappNumbersRequest::new(empty))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingArgument { argument: "numbers" }));
}

#[tokio::test]
async fn test_mark_message_as_read() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/markMessageAsRead/inst-1"))
        .and(body_json(json!({
            "readMessages": [
                {"remoteJid": "5511999999999@s.whatsapp.net", "fromMe": false, "id": "3EB0"}
            ]
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"message": "Read messages", "read": "success"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = MarkAsReadRequest {
        read_messages: vec![MessageKey::new("5511999999999@s.whatsapp.net", "3EB0", false)],
    };
    let answer = client(&mock_server)
        .chat()
        .mark_message_as_read("inst-1", &request)
        .await
        .unwrap();

    assert_eq!(answer.read, "success");
}

#[tokio::test]
async fn test_delete_for_everyone_sends_body_with_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/chat/deleteMessageForEveryone/inst-1"))
        .and(body_json(json!({
            "id": "3EB0", "remoteJid": "5511999999999@s.whatsapp.net", "fromMe": true
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"key": {"id": "3EB0"}, "messageStubType": "REVOKE"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = DeleteMessageRequest {
        id: "3EB0".into(),
        remote_jid: "5511999999999@s.whatsapp.net".into(),
        from_me: true,
        participant: None,
    };
    let answer = client(&mock_server)
        .chat()
        .delete_message_for_everyone("inst-1", &request)
        .await
        .unwrap();

    assert_eq!(answer["key"]["id"], "3EB0");
}

#[tokio::test]
async fn test_send_presence_validates_presence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let request = SendPresenceRequest {
        number: "5511999999999".into(),
        delay: 1200,
        presence: "".into(),
    };
    let err = client(&mock_server)
        .chat()
        .send_presence("inst-1", &request)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { argument: "presence", .. }));
}

#[tokio::test]
async fn test_find_messages_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/findMessages/inst-1"))
        .and(body_json(json!({
            "where": {"key": {"remoteJid": "5511999999999@s.whatsapp.net"}},
            "page": 2,
            "offset": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": {
                "total": 11,
                "pages": 2,
                "currentPage": 2,
                "records": [{
                    "id": "cm1",
                    "key": {
                        "remoteJid": "5511999999999@s.whatsapp.net",
                        "fromMe": false,
                        "id": "3EB0"
                    },
                    "messageType": "conversation",
                    "message": {"conversation": "oi"},
                    "messageTimestamp": 1714730400
                }]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request =
        FindRequest::filtered(json!({"key": {"remoteJid": "5511999999999@s.whatsapp.net"}}))
            .page(2, 10);
    let found = client(&mock_server)
        .chat()
        .find_messages("inst-1", &request)
        .await
        .unwrap();

    assert_eq!(found.messages.total, 11);
    assert_eq!(found.messages.current_page, 2);
    let record = &found.messages.records[0];
    assert_eq!(record.key.id, "3EB0");
    assert_eq!(record.message_timestamp, Some(1714730400));
}

#[tokio::test]
async fn test_find_chats_without_filter_sends_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/findChats/inst-1"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "c1", "remoteJid": "5511999999999@s.whatsapp.net", "unreadCount": 3,
             "updatedAt": "2024-05-03T10:00:00.000Z"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let chats = client(&mock_server)
        .chat()
        .find_chats("inst-1", &FindRequest::default())
        .await
        .unwrap();

    assert_eq!(chats[0].unread_count, Some(3));
    assert_eq!(chats[0].updated_at.as_deref(), Some("2024-05-03T10:00:00.000Z"));
}

#[tokio::test]
async fn test_contacts_lookups() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/fetchProfilePictureUrl/inst-1"))
        .and(body_json(json!({"number": "5511999999999"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "wuid": "5511999999999@s.whatsapp.net",
            "profilePictureUrl": "https://pps.whatsapp.net/v/t61/abc.jpg"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/updateBlockStatus/inst-1"))
        .and(body_json(json!({"number": "5511999999999", "status": "block"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"accepted": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let contacts = client(&mock_server).contacts();

    let picture = contacts
        .fetch_profile_picture_url("inst-1", &NumberRequest::new("5511999999999"))
        .await
        .unwrap();
    assert!(picture.profile_picture_url.unwrap().starts_with("https://"));

    let blocked = contacts
        .update_block_status(
            "inst-1",
            &BlockStatusRequest {
                number: "5511999999999".into(),
                status: BlockStatus::Block,
            },
        )
        .await
        .unwrap();
    assert!(blocked.accepted);
}

#[tokio::test]
async fn test_profile_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/updateProfileName/inst-1"))
        .and(body_json(json!({"name": "Support"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"update": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/chat/removeProfilePicture/inst-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"update": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/chat/fetchPrivacySettings/inst-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "readreceipts": "all", "profile": "contacts", "status": "contacts",
            "online": "all", "last": "none", "groupadd": "contact_blacklist"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/updatePrivacySettings/inst-1"))
        .and(body_json(json!({"last": "contacts"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "update": "success", "data": {"last": "contacts"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let profile = client(&mock_server).profile();

    let renamed = profile
        .update_profile_name("inst-1", &UpdateProfileNameRequest { name: "Support".into() })
        .await
        .unwrap();
    assert_eq!(renamed["update"], "success");

    profile.remove_profile_picture("inst-1").await.unwrap();

    let privacy = profile.fetch_privacy_settings("inst-1").await.unwrap();
    assert_eq!(privacy.last, Some(Visibility::None));
    assert_eq!(privacy.groupadd, Some(Visibility::ContactBlacklist));

    let change = PrivacySettings {
        last: Some(Visibility::Contacts),
        ..Default::default()
    };
    let updated = profile.update_privacy_settings("inst-1", &change).await.unwrap();
    assert_eq!(updated.update, "success");
    assert_eq!(updated.data.last, Some(Visibility::Contacts));
}

#[tokio::test]
async fn test_blank_profile_name_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .profile()
        .update_profile_name("inst-1", &UpdateProfileNameRequest { name: " ".into() })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { argument: "name", .. }));
}

fn decoded<T: DeserializeOwned>(body: &Value) -> T {
    serde_json::from_value(body.clone()).unwrap()
}

fn last_message() -> LastMessage {
    LastMessage {
        key: MessageKey::new("5511999999999@s.whatsapp.net", "3EB0", false),
    }
}

#[tokio::test]
async fn test_chat_endpoints_pass_responses_through() {
    let mock_server = MockServer::start().await;

    let key = json!({"remoteJid": "5511999999999@s.whatsapp.net", "fromMe": false, "id": "3EB0"});
    let archived = json!({"chatId": "5511999999999@s.whatsapp.net", "archived": true});
    let unread = json!({"chatId": "5511999999999@s.whatsapp.net", "markedChatUnread": true});
    let media = json!({
        "mediaType": "imageMessage",
        "fileName": "photo.jpg",
        "size": {"fileLength": "1024"},
        "mimetype": "image/jpeg",
        "base64": "/9j/4AAQ"
    });
    let edited = json!({
        "key": {"id": "3EB0"},
        "message": {"editedMessage": {}},
        "status": "PENDING"
    });
    let statuses = json!([
        {
            "id": "s1",
            "keyId": "3EB0",
            "remoteJid": "5511999999999@s.whatsapp.net",
            "fromMe": true,
            "status": "READ"
        }
    ]);
    let contacts = json!([
        {"id": "ct1", "remoteJid": "5511999999999@s.whatsapp.net", "pushName": "Ana"}
    ]);

    let cases = [
        (
            "archiveChat",
            json!({"lastMessage": {"key": key}, "chat": CHAT_JID, "archive": true}),
            &archived,
        ),
        (
            "markChatUnread",
            json!({"lastMessage": {"key": key}, "chat": CHAT_JID}),
            &unread,
        ),
        (
            "getBase64FromMediaMessage",
            json!({"message": {"key": {"id": "3EB0"}}, "convertToMp4": false}),
            &media,
        ),
        ("updateMessage", json!({"number": "5511999999999", "key": key, "text": "fixed"}), &edited),
        ("findStatusMessage", json!({"where": {"keyId": "3EB0"}}), &statuses),
        ("findContacts", json!({"where": {"pushName": "Ana"}}), &contacts),
    ];

    for (action, body, answer) in cases {
        Mock::given(method("POST"))
            .and(path(format!("/chat/{}/inst-1", action)))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(201).set_body_json(answer))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client(&mock_server);
    let chat = client.chat();

    let request = ArchiveChatRequest {
        last_message: last_message(),
        chat: "5511999999999@s.whatsapp.net".into(),
        archive: true,
    };
    assert_eq!(
        chat.archive_chat("inst-1", &request).await.unwrap(),
        decoded::<ArchiveChatResponse>(&archived)
    );

    let request = MarkChatUnreadRequest {
        last_message: last_message(),
        chat: "5511999999999@s.whatsapp.net".into(),
    };
    assert_eq!(
        chat.mark_chat_unread("inst-1", &request).await.unwrap(),
        decoded::<MarkChatUnreadResponse>(&unread)
    );

    let base64 = chat
        .get_base64_from_media_message("inst-1", &Base64MediaRequest::new("3EB0"))
        .await
        .unwrap();
    assert_eq!(base64, decoded::<Base64MediaResponse>(&media));
    assert_eq!(base64.base64, "/9j/4AAQ");

    let request = UpdateMessageRequest {
        number: "5511999999999".into(),
        key: MessageKey::new("5511999999999@s.whatsapp.net", "3EB0", false),
        text: "fixed".into(),
    };
    assert_eq!(chat.update_message("inst-1", &request).await.unwrap(), edited);

    let found = chat
        .find_status_message("inst-1", &FindRequest::filtered(json!({"keyId": "3EB0"})))
        .await
        .unwrap();
    assert_eq!(found, decoded::<Vec<MessageStatusRecord>>(&statuses));

    let found = client
        .contacts()
        .find_contacts("inst-1", &FindRequest::filtered(json!({"pushName": "Ana"})))
        .await
        .unwrap();
    assert_eq!(found, decoded::<Vec<ContactRecord>>(&contacts));
}

#[tokio::test]
async fn test_profile_endpoints_pass_responses_through() {
    let mock_server = MockServer::start().await;

    let business = json!({
        "wuid": "5511999999999@s.whatsapp.net",
        "description": "Bakery",
        "website": ["https://bakery.example.com"],
        "category": "Food",
        "businessHours": {"timezone": "America/Sao_Paulo"}
    });
    let profile_info = json!({
        "wuid": "5511999999999@s.whatsapp.net",
        "name": "Ana",
        "numberExists": true,
        "status": {"status": "Available", "setAt": "2024-05-03T10:00:00.000Z"},
        "isBusiness": false
    });
    let updated = json!({"update": "success"});

    let cases = [
        ("fetchBusinessProfile", json!({"number": "5511999999999"}), &business),
        ("fetchProfile", json!({"number": "5511999999999"}), &profile_info),
        ("updateProfileStatus", json!({"status": "On holiday"}), &updated),
        ("updateProfilePicture", json!({"picture": "https://cdn.example.com/me.png"}), &updated),
    ];

    for (action, body, answer) in cases {
        Mock::given(method("POST"))
            .and(path(format!("/chat/{}/inst-1", action)))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let profile = client(&mock_server).profile();
    let number = NumberRequest::new("5511999999999");

    assert_eq!(
        profile.fetch_business_profile("inst-1", &number).await.unwrap(),
        decoded::<BusinessProfile>(&business)
    );

    let info = profile.fetch_profile("inst-1", &number).await.unwrap();
    assert_eq!(info, decoded::<Profile>(&profile_info));
    assert_eq!(info.status.unwrap().status.as_deref(), Some("Available"));

    let status = UpdateProfileStatusRequest {
        status: "On holiday".into(),
    };
    assert_eq!(profile.update_profile_status("inst-1", &status).await.unwrap(), updated);

    let picture = UpdateProfilePictureRequest {
        picture: "https://cdn.example.com/me.png".into(),
    };
    assert_eq!(profile.update_profile_picture("inst-1", &picture).await.unwrap(), updated);
}
