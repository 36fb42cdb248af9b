mod common;

use common::client;
use evolution_client::types::group::{
    CreateGroupRequest, GroupInfo, GroupSetting, ParticipantAction, ParticipantsResponse,
    RevokeInviteCodeResponse, SendInviteRequest, SendInviteResponse, ToggleEphemeralRequest,
    UpdateGroupDescriptionRequest, UpdateGroupPictureRequest, UpdateGroupSubjectRequest,
    UpdateParticipantRequest, UpdateResponse, UpdateSettingRequest,
};
use evolution_client::Error;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GROUP: &str = "120363295648424210@g.us";

#[tokio::test]
async fn test_fetch_all_groups_with_participants() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/group/fetchAllGroups/inst-1"))
        .and(query_param("getParticipants", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": GROUP,
            "subject": "Team",
            "subjectTime": 1714730400,
            "creation": "1714730000",
            "size": 2,
            "participants": [
                {"id": "5511999999999@s.whatsapp.net", "admin": "superadmin"},
                {"id": "5511888888888@s.whatsapp.net", "admin": null}
            ]
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let groups = client(&mock_server)
        .groups()
        .fetch_all_groups("inst-1", true)
        .await
        .unwrap();

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.subject, "Team");
    assert_eq!(group.creation, Some(1714730000));
    assert_eq!(group.subject_time, Some(1714730400));
    assert!(group.participants[0].is_admin());
    assert!(!group.participants[1].is_admin());
}

#[tokio::test]
async fn test_fetch_all_groups_without_participants() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/group/fetchAllGroups/inst-1"))
        .and(query_param("getParticipants", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let groups = client(&mock_server)
        .groups()
        .fetch_all_groups("inst-1", false)
        .await
        .unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_update_group_picture_addresses_group_by_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/group/updateGroupPicture/inst-1"))
        .and(query_param("groupJid", GROUP))
        .and(body_json(json!({"image": "https://cdn.example.com/team.png"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"update": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let update = client(&mock_server)
        .groups()
        .update_group_picture(
            "inst-1",
            GROUP,
            &UpdateGroupPictureRequest {
                image: "https://cdn.example.com/team.png".into(),
            },
        )
        .await
        .unwrap();

    assert!(update.is_success());
}

#[tokio::test]
async fn test_blank_group_jid_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .groups()
        .participants("inst-1", " ")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { argument: "groupJid", .. }));
}

#[tokio::test]
async fn test_create_group_validation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let groups = client(&mock_server).groups();

    let no_subject = CreateGroupRequest {
        subject: "".into(),
        description: None,
        participants: vec!["5511999999999".into()],
    };
    let err = groups.create("inst-1", &no_subject).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { argument: "subject", .. }));

    let no_members = CreateGroupRequest {
        subject: "Team".into(),
        description: None,
        participants: vec![],
    };
    let err = groups.create("inst-1", &no_members).await.unwrap_err();
    assert!(matches!(err, Error::MissingArgument { argument: "participants" }));
}

#[tokio::test]
async fn test_update_participant() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/group/updateParticipant/inst-1"))
        .and(query_param("groupJid", GROUP))
        .and(body_json(json!({"action": "promote", "participants": ["5511888888888"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "updateParticipants": [{"status": "200", "jid": "5511888888888@s.whatsapp.net"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client(&mock_server)
        .groups()
        .update_participant(
            "inst-1",
            GROUP,
            &UpdateParticipantRequest {
                action: ParticipantAction::Promote,
                participants: vec!["5511888888888".into()],
            },
        )
        .await
        .unwrap();

    assert_eq!(response.update_participants[0].status, "200");
}

#[tokio::test]
async fn test_settings_ephemeral_and_leave() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/group/updateSetting/inst-1"))
        .and(query_param("groupJid", GROUP))
        .and(body_json(json!({"action": "not_announcement"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"update": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/group/toggleEphemeral/inst-1"))
        .and(query_param("groupJid", GROUP))
        .and(body_json(json!({"expiration": 604800})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/group/leaveGroup/inst-1"))
        .and(query_param("groupJid", GROUP))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"groupJid": GROUP, "leave": true})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let groups = client(&mock_server).groups();

    let setting = groups
        .update_setting(
            "inst-1",
            GROUP,
            &UpdateSettingRequest {
                action: GroupSetting::NotAnnouncement,
            },
        )
        .await
        .unwrap();
    assert!(setting.is_success());

    let ephemeral = groups
        .toggle_ephemeral("inst-1", GROUP, &ToggleEphemeralRequest { expiration: 604800 })
        .await
        .unwrap();
    assert!(ephemeral.success);

    let left = groups.leave_group("inst-1", GROUP).await.unwrap();
    assert!(left.leave);
    assert_eq!(left.group_jid, GROUP);
}

#[tokio::test]
async fn test_invite_code_round() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/group/inviteCode/inst-1"))
        .and(query_param("groupJid", GROUP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inviteUrl": "https://chat.whatsapp.com/AbCdEf",
            "inviteCode": "AbCdEf"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/group/acceptInviteCode/inst-2"))
        .and(query_param("inviteCode", "AbCdEf"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"accepted": true, "groupJid": GROUP})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let groups = client(&mock_server).groups();

    let invite = groups.invite_code("inst-1", GROUP).await.unwrap();
    assert_eq!(invite.invite_code, "AbCdEf");

    let accepted = groups.accept_invite_code("inst-2", &invite.invite_code).await.unwrap();
    assert!(accepted.accepted);
    assert_eq!(accepted.group_jid.as_deref(), Some(GROUP));
}

fn decoded<T: DeserializeOwned>(body: &Value) -> T {
    serde_json::from_value(body.clone()).unwrap()
}

fn team_group() -> Value {
    json!({
        "id": GROUP,
        "subject": "Team",
        "subjectOwner": "5511999999999@s.whatsapp.net",
        "subjectTime": 1714730400,
        "size": 2,
        "creation": 1714730000,
        "owner": "5511999999999@s.whatsapp.net",
        "desc": "Weekly sync",
        "restrict": false,
        "announce": false,
        "participants": [
            {"id": "5511999999999@s.whatsapp.net", "admin": "superadmin"},
            {"id": "5511888888888@s.whatsapp.net", "admin": null}
        ]
    })
}

#[tokio::test]
async fn test_create_group() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/group/create/inst-1"))
        .and(body_json(json!({
            "subject": "Team",
            "description": "Weekly sync",
            "participants": ["5511888888888"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(team_group()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = CreateGroupRequest {
        subject: "Team".into(),
        description: Some("Weekly sync".into()),
        participants: vec!["5511888888888".into()],
    };
    let group = client(&mock_server)
        .groups()
        .create("inst-1", &request)
        .await
        .unwrap();

    assert_eq!(group, decoded::<GroupInfo>(&team_group()));
    assert_eq!(group.id, GROUP);
}

#[tokio::test]
async fn test_group_jid_endpoints_pass_responses_through() {
    let mock_server = MockServer::start().await;

    let updated = json!({"update": "success"});
    let revoked = json!({"revoked": true, "code": "XyZ123"});
    let participants = json!({"participants": [
        {"id": "5511999999999@s.whatsapp.net", "admin": "superadmin"},
        {"id": "5511888888888@s.whatsapp.net", "admin": null}
    ]});
    let info = team_group();

    let cases = [
        ("POST", "updateGroupSubject", Some(json!({"subject": "Core team"})), &updated),
        ("POST", "updateGroupDescription", Some(json!({"description": "Daily sync"})), &updated),
        ("POST", "revokeInviteCode", None, &revoked),
        ("GET", "findGroupInfos", None, &info),
        ("GET", "participants", None, &participants),
    ];

    for (verb, action, body, answer) in cases {
        let mock = Mock::given(method(verb))
            .and(path(format!("/group/{}/inst-1", action)))
            .and(query_param("groupJid", GROUP));
        let mock = match body {
            Some(body) => mock.and(body_json(body)),
            None => mock,
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(answer))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let groups = client(&mock_server).groups();

    let subject = UpdateGroupSubjectRequest {
        subject: "Core team".into(),
    };
    assert_eq!(
        groups.update_group_subject("inst-1", GROUP, &subject).await.unwrap(),
        decoded::<UpdateResponse>(&updated)
    );

    let description = UpdateGroupDescriptionRequest {
        description: "Daily sync".into(),
    };
    assert_eq!(
        groups.update_group_description("inst-1", GROUP, &description).await.unwrap(),
        decoded::<UpdateResponse>(&updated)
    );

    assert_eq!(
        groups.revoke_invite_code("inst-1", GROUP).await.unwrap(),
        decoded::<RevokeInviteCodeResponse>(&revoked)
    );

    assert_eq!(
        groups.find_group_infos("inst-1", GROUP).await.unwrap(),
        decoded::<GroupInfo>(&info)
    );

    let members = groups.participants("inst-1", GROUP).await.unwrap();
    assert_eq!(members, decoded::<ParticipantsResponse>(&participants));
    assert_eq!(members.participants.len(), 2);
}

#[tokio::test]
async fn test_send_invite_and_invite_info() {
    let mock_server = MockServer::start().await;

    let sent = json!({"send": true, "inviteUrl": "https://chat.whatsapp.com/AbCdEf"});

    Mock::given(method("POST"))
        .and(path("/group/sendInvite/inst-1"))
        .and(body_json(json!({
            "groupJid": GROUP,
            "description": "Join us",
            "numbers": ["5511777777777"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&sent))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/group/inviteInfo/inst-2"))
        .and(query_param("inviteCode", "AbCdEf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(team_group()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let groups = client(&mock_server).groups();

    let request = SendInviteRequest {
        group_jid: GROUP.into(),
        description: "Join us".into(),
        numbers: vec!["5511777777777".into()],
    };
    assert_eq!(
        groups.send_invite("inst-1", &request).await.unwrap(),
        decoded::<SendInviteResponse>(&sent)
    );

    let info = groups.invite_info("inst-2", "AbCdEf").await.unwrap();
    assert_eq!(info, decoded::<GroupInfo>(&team_group()));
}
