// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile operations: upsert, lookups, nested experience/education entries
//! and account deletion.

use futures_util::future::try_join_all;

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{
    new_sub_id, EducationEntry, ExperienceEntry, Profile, ProfileOwner, ProfileView,
};
use crate::time_utils::parse_date;
use crate::validation::{self, EducationForm, ExperienceForm, ProfileForm};

const NO_PROFILE: &str = "There is no profile for this user";

/// Profile operations.
#[derive(Clone)]
pub struct ProfileService {
    db: Db,
}

impl ProfileService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    // ─── Lookups ─────────────────────────────────────────────────

    /// The caller's own profile.
    pub async fn get_own(&self, caller: &AuthUser) -> Result<ProfileView> {
        let profile = self.require_profile(caller).await?;
        self.with_owner(profile).await
    }

    /// Every profile. An empty collection is reported as not found.
    pub async fn list_all(&self) -> Result<Vec<ProfileView>> {
        let profiles = self.db.list_profiles().await.map_err(|e| {
            tracing::warn!(error = %e, "Profile listing failed");
            AppError::not_found("profile", "There are no profiles")
        })?;

        if profiles.is_empty() {
            return Err(AppError::not_found("noProfile", "There are no profiles"));
        }

        try_join_all(profiles.into_iter().map(|p| self.with_owner(p))).await
    }

    pub async fn get_by_handle(&self, handle: &str) -> Result<ProfileView> {
        let profile = self
            .db
            .get_profile_by_handle(handle)
            .await?
            .ok_or_else(|| AppError::not_found("noProfile", NO_PROFILE))?;
        self.with_owner(profile).await
    }

    /// Profile owned by `user_id`.
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<ProfileView> {
        let profile = self
            .db
            .get_profile_by_owner(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("noProfile", NO_PROFILE))?;
        self.with_owner(profile).await
    }

    // ─── Create / Update ─────────────────────────────────────────

    /// Create the caller's profile, or apply a partial update to it.
    ///
    /// Optional fields that are absent are left unchanged; an empty string
    /// clears them.
    pub async fn upsert(&self, caller: &AuthUser, form: ProfileForm) -> Result<Profile> {
        validation::check(&form)?;

        let handle = form.handle.as_str();
        let existing = self.db.get_profile_by_owner(&caller.id).await?;

        if let Some(taken) = self.db.get_profile_by_handle(handle).await? {
            if taken.owner_id != caller.id {
                return Err(AppError::bad_request("handle", "That handle already exists"));
            }
        }

        let (mut profile, created) = match existing {
            Some(profile) => (profile, false),
            None => (Profile::new(&caller.id, handle), true),
        };
        apply_profile_form(&mut profile, &form);
        self.db.save_profile(&profile).await?;

        if created {
            tracing::info!(owner_id = %caller.id, handle = %profile.handle, "Created profile");
        } else {
            tracing::debug!(owner_id = %caller.id, "Updated profile");
        }

        Ok(profile)
    }

    // ─── Experience ──────────────────────────────────────────────

    pub async fn add_experience(&self, caller: &AuthUser, form: ExperienceForm) -> Result<Profile> {
        validation::check(&form)?;
        let mut profile = self.require_profile(caller).await?;

        let entry = experience_from_form(new_sub_id(), &form)?;
        profile.experience.insert(0, entry);
        self.db.save_profile(&profile).await?;
        Ok(profile)
    }

    /// Replace the editable fields of an experience entry, keeping its sub-id.
    pub async fn edit_experience(
        &self,
        caller: &AuthUser,
        sub_id: &str,
        form: ExperienceForm,
    ) -> Result<Profile> {
        validation::check(&form)?;
        let mut profile = self.require_profile(caller).await?;

        let index = profile
            .experience_position(sub_id)
            .ok_or_else(experience_not_found)?;
        profile.experience[index] = experience_from_form(sub_id.to_string(), &form)?;
        self.db.save_profile(&profile).await?;
        Ok(profile)
    }

    pub async fn get_experience(&self, caller: &AuthUser, sub_id: &str) -> Result<ExperienceEntry> {
        let profile = self.require_profile(caller).await?;
        let index = profile
            .experience_position(sub_id)
            .ok_or_else(experience_not_found)?;
        Ok(profile.experience[index].clone())
    }

    pub async fn remove_experience(&self, caller: &AuthUser, sub_id: &str) -> Result<Profile> {
        let mut profile = self.require_profile(caller).await?;
        let index = profile
            .experience_position(sub_id)
            .ok_or_else(experience_not_found)?;
        profile.experience.remove(index);
        self.db.save_profile(&profile).await?;
        Ok(profile)
    }

    // ─── Education ───────────────────────────────────────────────

    pub async fn add_education(&self, caller: &AuthUser, form: EducationForm) -> Result<Profile> {
        validation::check(&form)?;
        let mut profile = self.require_profile(caller).await?;

        let entry = education_from_form(new_sub_id(), &form)?;
        profile.education.insert(0, entry);
        self.db.save_profile(&profile).await?;
        Ok(profile)
    }

    /// Replace the editable fields of an education entry, keeping its sub-id.
    pub async fn edit_education(
        &self,
        caller: &AuthUser,
        sub_id: &str,
        form: EducationForm,
    ) -> Result<Profile> {
        validation::check(&form)?;
        let mut profile = self.require_profile(caller).await?;

        let index = profile
            .education_position(sub_id)
            .ok_or_else(education_not_found)?;
        profile.education[index] = education_from_form(sub_id.to_string(), &form)?;
        self.db.save_profile(&profile).await?;
        Ok(profile)
    }

    pub async fn get_education(&self, caller: &AuthUser, sub_id: &str) -> Result<EducationEntry> {
        let profile = self.require_profile(caller).await?;
        let index = profile
            .education_position(sub_id)
            .ok_or_else(education_not_found)?;
        Ok(profile.education[index].clone())
    }

    pub async fn remove_education(&self, caller: &AuthUser, sub_id: &str) -> Result<Profile> {
        let mut profile = self.require_profile(caller).await?;
        let index = profile
            .education_position(sub_id)
            .ok_or_else(education_not_found)?;
        profile.education.remove(index);
        self.db.save_profile(&profile).await?;
        Ok(profile)
    }

    // ─── Account Deletion ────────────────────────────────────────

    /// Delete the caller's profile (if any), then their identity.
    pub async fn delete_own(&self, caller: &AuthUser) -> Result<()> {
        if let Some(profile) = self.db.get_profile_by_owner(&caller.id).await? {
            self.db.delete_profile(&profile.id).await?;
            tracing::debug!(owner_id = %caller.id, "Deleted profile");
        }

        self.db.delete_identity(&caller.id).await?;
        tracing::info!(identity_id = %caller.id, "Deleted account");
        Ok(())
    }

    // ─── Helper Methods ──────────────────────────────────────────

    async fn require_profile(&self, caller: &AuthUser) -> Result<Profile> {
        self.db
            .get_profile_by_owner(&caller.id)
            .await?
            .ok_or_else(|| AppError::not_found("noProfile", NO_PROFILE))
    }

    /// Join the owner's display fields onto a profile.
    async fn with_owner(&self, profile: Profile) -> Result<ProfileView> {
        let user = self
            .db
            .get_identity(&profile.owner_id)
            .await?
            .map(|identity| ProfileOwner {
                id: identity.id,
                name: identity.name,
                avatar_url: identity.avatar_url,
            });
        Ok(ProfileView { profile, user })
    }
}

fn experience_not_found() -> AppError {
    AppError::not_found("experienceNotFound", "Experience entry not found")
}

fn education_not_found() -> AppError {
    AppError::not_found("educationNotFound", "Education entry not found")
}

/// Merge the fields present in `form` into `profile`.
fn apply_profile_form(profile: &mut Profile, form: &ProfileForm) {
    fn set(target: &mut Option<String>, value: &Option<String>) {
        if let Some(value) = value {
            *target = Some(value.clone());
        }
    }

    profile.handle = form.handle.clone();
    profile.status = Some(form.status.clone());
    profile.skills = form.skill_list();

    set(&mut profile.company, &form.company);
    set(&mut profile.website, &form.website);
    set(&mut profile.location, &form.location);
    set(&mut profile.bio, &form.bio);
    set(&mut profile.github_username, &form.github_username);

    let social = &mut profile.social;
    set(&mut social.youtube, &form.youtube);
    set(&mut social.twitter, &form.twitter);
    set(&mut social.facebook, &form.facebook);
    set(&mut social.linkedin, &form.linkedin);
    set(&mut social.instagram, &form.instagram);
}

/// Parse an optional end date; blank means none.
fn parse_to_date(to: &Option<String>) -> Result<Option<chrono::NaiveDate>> {
    match to.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| AppError::bad_request("to", "To date is invalid")),
    }
}

fn parse_from_date(from: &str) -> Result<chrono::NaiveDate> {
    parse_date(from).ok_or_else(|| AppError::bad_request("from", "From date is invalid"))
}

fn experience_from_form(sub_id: String, form: &ExperienceForm) -> Result<ExperienceEntry> {
    Ok(ExperienceEntry {
        sub_id,
        title: form.title.clone(),
        company: form.company.clone(),
        location: form.location.clone(),
        from: parse_from_date(&form.from)?,
        to: parse_to_date(&form.to)?,
        current: form.current,
        description: form.description.clone(),
    })
}

fn education_from_form(sub_id: String, form: &EducationForm) -> Result<EducationEntry> {
    Ok(EducationEntry {
        sub_id,
        school: form.school.clone(),
        degree: form.degree.clone(),
        field_of_study: form.field_of_study.clone(),
        from: parse_from_date(&form.from)?,
        to: parse_to_date(&form.to)?,
        current: form.current,
        description: form.description.clone(),
    })
}
