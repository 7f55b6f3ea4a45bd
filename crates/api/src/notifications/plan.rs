use askhub_core::notification::{
    commented_message, mentioned_message, should_notify, NotificationType, ANSWERED_MESSAGE,
};
use askhub_core::types::DbId;
use askhub_db::models::notification::CreateNotification;

/// A freshly posted comment, with the ids needed to address notifications.
#[derive(Debug, Clone)]
pub struct CommentEvent<'a> {
    pub author_id: DbId,
    pub author_username: &'a str,
    pub comment_id: DbId,
    pub answer_id: DbId,
    pub answer_owner_id: DbId,
    pub question_id: DbId,
}

/// `ANSWERED` notification to the question owner, unless they answered
/// their own question.
pub fn plan_answer_notification(
    answerer_id: DbId,
    question_owner_id: DbId,
    question_id: DbId,
    answer_id: DbId,
) -> Option<CreateNotification> {
    should_notify(answerer_id, question_owner_id).then(|| CreateNotification {
        sender_id: answerer_id,
        receiver_id: question_owner_id,
        notification_type: NotificationType::Answered,
        message: ANSWERED_MESSAGE.to_string(),
        question_id: Some(question_id),
        answer_id: Some(answer_id),
        comment_id: None,
    })
}

/// `MENTIONED` for every mentioned user, then `COMMENTED` for the answer
/// owner unless they were already mentioned. The author never notifies
/// themselves.
pub fn plan_comment_notifications(
    event: &CommentEvent<'_>,
    mentioned_user_ids: &[DbId],
) -> Vec<CreateNotification> {
    let build = |receiver_id, notification_type, message| CreateNotification {
        sender_id: event.author_id,
        receiver_id,
        notification_type,
        message,
        question_id: Some(event.question_id),
        answer_id: Some(event.answer_id),
        comment_id: Some(event.comment_id),
    };

    let mut planned: Vec<CreateNotification> = mentioned_user_ids
        .iter()
        .copied()
        .filter(|&id| should_notify(event.author_id, id))
        .map(|id| {
            build(
                id,
                NotificationType::Mentioned,
                mentioned_message(event.author_username),
            )
        })
        .collect();

    if should_notify(event.author_id, event.answer_owner_id)
        && !mentioned_user_ids.contains(&event.answer_owner_id)
    {
        planned.push(build(
            event.answer_owner_id,
            NotificationType::Commented,
            commented_message(event.author_username),
        ));
    }

    planned
}
