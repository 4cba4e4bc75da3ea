//! Built-in C# template bodies.
//!
//! This module implements the `TemplateSet` port for C# / Entity Framework
//! Core targets. The bodies are fixed text with three slots — `{namespace}`,
//! `{name}`, `{context_class}` — substituted verbatim; no escaping or
//! validation of the substituted identifiers is performed.
//!
//! The generation engine never inspects this text. Tests that care about
//! composition mechanics stub the `TemplateSet` trait instead of asserting
//! on these bodies.

use repogen_core::domain::{ContextName, EntityName, TemplateSet};

/// Template set producing C# repository/unit-of-work sources.
#[derive(Debug, Clone)]
pub struct CSharpTemplates {
    extension: String,
}

impl CSharpTemplates {
    pub fn new() -> Self {
        Self {
            extension: "cs".into(),
        }
    }

    /// Use a non-default extension for scanned and generated files (e.g.
    /// projects that keep entity sources as `.csx`).
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Default for CSharpTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSet for CSharpTemplates {
    fn source_extension(&self) -> &str {
        &self.extension
    }

    fn repository_interface(&self, namespace: &str, entity: &EntityName) -> String {
        REPOSITORY_INTERFACE
            .replace("{namespace}", namespace)
            .replace("{name}", entity.as_str())
    }

    fn repository_implementation(
        &self,
        namespace: &str,
        entity: &EntityName,
        context: &ContextName,
    ) -> String {
        REPOSITORY_IMPLEMENTATION
            .replace("{namespace}", namespace)
            .replace("{name}", entity.as_str())
            .replace("{context_class}", context.as_str())
    }

    fn unit_of_work_interface_header(&self, namespace: &str) -> String {
        UOW_INTERFACE_HEADER.replace("{namespace}", namespace)
    }

    fn unit_of_work_interface_property(&self, entity: &EntityName) -> String {
        format!(
            "    {} {} {{ get; }}\n",
            entity.repository_interface(),
            entity.repository_property()
        )
    }

    fn unit_of_work_interface_footer(&self) -> String {
        UOW_INTERFACE_FOOTER.to_string()
    }

    fn unit_of_work_implementation_header(&self, namespace: &str, context: &ContextName) -> String {
        UOW_IMPL_HEADER
            .replace("{namespace}", namespace)
            .replace("{context_class}", context.as_str())
    }

    fn unit_of_work_implementation_property(&self, entity: &EntityName) -> String {
        format!(
            "    public {iface} {prop} => GetCustomRepository<{iface}>();\n",
            iface = entity.repository_interface(),
            prop = entity.repository_property()
        )
    }

    fn unit_of_work_implementation_footer(&self) -> String {
        UOW_IMPL_FOOTER.to_string()
    }

    fn generic_repository_interface(&self, namespace: &str) -> String {
        GENERIC_REPOSITORY_INTERFACE.replace("{namespace}", namespace)
    }

    fn generic_repository_implementation(&self, namespace: &str) -> String {
        GENERIC_REPOSITORY_IMPLEMENTATION.replace("{namespace}", namespace)
    }
}

// ── Template bodies ───────────────────────────────────────────────────────────

const REPOSITORY_INTERFACE: &str = r#"using {namespace}.Domain.Entity;
using {namespace}.Infrastructure.Base;

namespace {namespace}.Infrastructure.Abstractions;

public interface I{name}Repository : IRepository<{name}>
{
}
"#;

const REPOSITORY_IMPLEMENTATION: &str = r#"using {namespace}.Domain.Entity;
using {namespace}.Infrastructure.Abstractions;
using {namespace}.Infrastructure.Base;
using {namespace}.Infrastructure.Context;

namespace {namespace}.Infrastructure.Repositories;

internal class {name}Repository : Repository<{name}>, I{name}Repository
{
    public {name}Repository({context_class} context) : base(context)
    {
    }
}
"#;

const UOW_INTERFACE_HEADER: &str = r#"using {namespace}.Infrastructure.Abstractions;
namespace {namespace}.Infrastructure.Base;

public interface IUnitOfWork : IDisposable, IAsyncDisposable
{
"#;

const UOW_INTERFACE_FOOTER: &str = r#"    public bool IsTransactionStarted { get; }
    IRepository<T> GetRepository<T>() where T : class;
    TRepository GetCustomRepository<TRepository>() where TRepository : class;

    Task BeginTransactionAsync(CancellationToken cancellationToken = default);
    Task CommitTransactionAsync(CancellationToken cancellationToken = default);
    Task RollbackTransactionAsync(CancellationToken cancellationToken = default);
    Task<int> SaveChangesAsync(CancellationToken cancellationToken = default);
}
"#;

const UOW_IMPL_HEADER: &str = r#"using System.Collections.Concurrent;
using Microsoft.EntityFrameworkCore.Storage;
using Microsoft.Extensions.DependencyInjection;
using {namespace}.Domain.Exceptions;
using {namespace}.Infrastructure.Context;
using {namespace}.Infrastructure.Abstractions;
namespace {namespace}.Infrastructure.Base;

public class UnitOfWork : IUnitOfWork
{
    private readonly {context_class} _context;
    private readonly ConcurrentDictionary<Type, object> _customRepositories = new();
    private readonly ConcurrentDictionary<Type, object> _repositories = new();
    private readonly IServiceProvider _serviceProvider;
    private bool _disposed;
    private IDbContextTransaction? _transaction;

    public UnitOfWork({context_class} context, IServiceProvider serviceProvider)
    {
        _context = context ?? throw new ArgumentNullException(nameof(context));
        _serviceProvider = serviceProvider ?? throw new ArgumentNullException(nameof(serviceProvider));
    }

    public bool IsTransactionStarted => _transaction is not null;

"#;

const UOW_IMPL_FOOTER: &str = r#"
    public IRepository<T> GetRepository<T>() where T : class =>
        (IRepository<T>)_repositories.GetOrAdd(typeof(T), _ => _serviceProvider.GetRequiredService<IRepository<T>>());

    public TRepository GetCustomRepository<TRepository>() where TRepository : class =>
        (TRepository)_customRepositories.GetOrAdd(typeof(TRepository), _ => _serviceProvider.GetRequiredService<TRepository>());

    public async Task BeginTransactionAsync(CancellationToken cancellationToken = default) =>
        _transaction ??= await _context.Database.BeginTransactionAsync(cancellationToken);

    public async Task CommitTransactionAsync(CancellationToken cancellationToken = default)
    {
        if (_transaction is null) throw new TransactionException();
        await _transaction.CommitAsync(cancellationToken);
        await _transaction.DisposeAsync();
        _transaction = null;
    }

    public async Task RollbackTransactionAsync(CancellationToken cancellationToken = default)
    {
        if (_transaction is null) return;
        await _transaction.RollbackAsync(cancellationToken);
        await _transaction.DisposeAsync();
        _transaction = null;
    }

    public async Task<int> SaveChangesAsync(CancellationToken cancellationToken = default)
    {
        if (_transaction is not null) throw new TransactionException();
        return await _context.SaveChangesAsync(cancellationToken);
    }

    public void Dispose()
    {
        Dispose(true);
        GC.SuppressFinalize(this);
    }

    public async ValueTask DisposeAsync()
    {
        if (!_disposed)
        {
            if (_transaction is not null)
            {
                await _transaction.DisposeAsync();
                _transaction = null;
            }

            await _context.DisposeAsync();
            _disposed = true;
        }

        GC.SuppressFinalize(this);
    }

    protected virtual void Dispose(bool disposing)
    {
        if (_disposed) return;

        if (disposing)
        {
            _transaction?.Dispose();
            _context.Dispose();
        }

        _disposed = true;
    }
}
"#;

const GENERIC_REPOSITORY_INTERFACE: &str = r#"using System.Linq.Expressions;

namespace {namespace}.Infrastructure.Base
{
    /// <summary>
    ///     Generic repository interface for managing entities.
    /// </summary>
    /// <typeparam name="T">The type of entity being managed.</typeparam>
    public interface IRepository<T> where T : class
    {
        Task<List<T>> GetAllAsync(bool tracking = false, CancellationToken cancellationToken = default);
        Task<List<T>> GetAsync(Expression<Func<T, bool>> predicate, bool tracking = false, CancellationToken cancellationToken = default);
        Task<List<TResult>> GetAsync<TResult>(Expression<Func<T, bool>> predicate, Expression<Func<T, TResult>> selector, int skip, int take, bool tracking = false, CancellationToken cancellationToken = default);
        Task<List<TResult>> GetAsync<TResult>(Expression<Func<T, bool>> predicate, Expression<Func<T, TResult>> selector, bool tracking = false, CancellationToken cancellationToken = default);
        Task<List<TResult>> GetAsync<TResult>(Expression<Func<T, bool>> predicate, Expression<Func<T, TResult>> selector, int skip, int take, string? orderBy = null, bool descending = false, CancellationToken cancellationToken = default);
        Task<T?> GetSingleAsync(Expression<Func<T, bool>> predicate, bool tracking = false, CancellationToken cancellationToken = default);
        Task<TResult?> GetSingleAsync<TResult>(Expression<Func<T, bool>> predicate, Expression<Func<T, TResult>> selector, bool tracking = false, CancellationToken cancellationToken = default);
        Task<T?> FindByIdAsync(int id, CancellationToken cancellationToken = default);
        Task<T?> FindAsync(object[] keyValues, CancellationToken cancellationToken = default);
        Task<T> AddAsync(T entity, CancellationToken cancellationToken = default);
        Task AddRangeAsync(IEnumerable<T> entities, CancellationToken cancellationToken = default);
        Task UpdateAsync(T entity, CancellationToken cancellationToken = default);
        Task UpdateRangeAsync(IEnumerable<T> entities, CancellationToken cancellationToken = default);
        Task RemoveAsync(T entity, CancellationToken cancellationToken = default);
        Task RemoveRangeAsync(IEnumerable<T> entities, CancellationToken cancellationToken = default);
        Task<int> CountAsync(Expression<Func<T, bool>> predicate, CancellationToken cancellationToken = default);
        Task<bool> AnyAsync(Expression<Func<T, bool>> predicate, CancellationToken cancellationToken = default);
        Task<bool> AllAsync(Expression<Func<T, bool>> predicate, CancellationToken cancellationToken = default);
    }
}
"#;

const GENERIC_REPOSITORY_IMPLEMENTATION: &str = r#"using System.Linq.Expressions;
using {namespace}.Infrastructure.Base;
using Microsoft.EntityFrameworkCore;

namespace {namespace}.Infrastructure.Base
{
    internal class Repository<T> : IRepository<T> where T : class
    {
        private readonly DbSet<T> _dbSet;

        protected Repository(DbContext dbContext)
        {
            var context = dbContext ?? throw new ArgumentNullException(nameof(dbContext));
            _dbSet = context.Set<T>();
        }

        public async Task<List<T>> GetAllAsync(bool tracking = false, CancellationToken cancellationToken = default)
        {
            return await GetQueryable(tracking).ToListAsync(cancellationToken);
        }

        public async Task<List<T>> GetAsync(Expression<Func<T, bool>> predicate, bool tracking = false,
            CancellationToken cancellationToken = default)
        {
            return await GetQueryable(tracking).Where(predicate).ToListAsync(cancellationToken);
        }

        public async Task<List<TResult>> GetAsync<TResult>(Expression<Func<T, bool>> predicate,
            Expression<Func<T, TResult>> selector, bool tracking = false, CancellationToken cancellationToken = default)
        {
            return await GetQueryable(tracking).Where(predicate).Select(selector)
                .ToListAsync(cancellationToken);
        }

        public async Task<List<TResult>> GetAsync<TResult>(Expression<Func<T, bool>> predicate,
            Expression<Func<T, TResult>> selector, int skip, int take, bool tracking = false,
            CancellationToken cancellationToken = default)
        {
            return await GetQueryable(tracking).Where(predicate).Select(selector)
                .Skip(skip).Take(take).ToListAsync(cancellationToken);
        }

        public async Task<List<TResult>> GetAsync<TResult>(Expression<Func<T, bool>> predicate,
            Expression<Func<T, TResult>> selector, int skip, int take, string? orderBy = null, bool descending = false,
            CancellationToken cancellationToken = default)
        {
            var query = GetQueryable(false).Where(predicate);

            return await query.Select(selector).Skip(skip).Take(take).ToListAsync(cancellationToken);
        }

        public async Task<T?> GetSingleAsync(Expression<Func<T, bool>> predicate, bool tracking = false,
            CancellationToken cancellationToken = default)
        {
            return await GetQueryable(tracking).SingleOrDefaultAsync(predicate, cancellationToken);
        }

        public async Task<TResult?> GetSingleAsync<TResult>(Expression<Func<T, bool>> predicate,
            Expression<Func<T, TResult>> selector, bool tracking = false, CancellationToken cancellationToken = default)
        {
            return await GetQueryable(tracking).Where(predicate).Select(selector).SingleOrDefaultAsync(cancellationToken);
        }

        public async Task<T?> FindByIdAsync(int id, CancellationToken cancellationToken = default)
        {
            return await _dbSet.FindAsync(new object[] { id }, cancellationToken);
        }

        public async Task<T?> FindAsync(object[] keyValues, CancellationToken cancellationToken = default)
        {
            return await _dbSet.FindAsync(keyValues, cancellationToken);
        }

        public async Task<T> AddAsync(T entity, CancellationToken cancellationToken = default)
        {
            var addedEntity = await _dbSet.AddAsync(entity, cancellationToken);
            addedEntity.State = EntityState.Added;
            return addedEntity.Entity;
        }

        public async Task AddRangeAsync(IEnumerable<T> entities, CancellationToken cancellationToken = default)
        {
            await _dbSet.AddRangeAsync(entities, cancellationToken);
        }

        public Task UpdateAsync(T entity, CancellationToken cancellationToken = default)
        {
            var updatedEntity = _dbSet.Update(entity);
            updatedEntity.State = EntityState.Modified;
            return Task.CompletedTask;
        }

        public Task UpdateRangeAsync(IEnumerable<T> entities, CancellationToken cancellationToken = default)
        {
            _dbSet.UpdateRange(entities);
            return Task.CompletedTask;
        }

        public Task RemoveAsync(T entity, CancellationToken cancellationToken = default)
        {
            var removedEntity = _dbSet.Remove(entity);
            removedEntity.State = EntityState.Deleted;
            return Task.CompletedTask;
        }

        public Task RemoveRangeAsync(IEnumerable<T> entities, CancellationToken cancellationToken = default)
        {
            _dbSet.RemoveRange(entities);
            return Task.CompletedTask;
        }

        public Task<int> CountAsync(Expression<Func<T, bool>> predicate, CancellationToken cancellationToken = default)
        {
            return GetQueryable().CountAsync(predicate, cancellationToken);
        }

        public Task<bool> AnyAsync(Expression<Func<T, bool>> predicate, CancellationToken cancellationToken = default)
        {
            return GetQueryable().AnyAsync(predicate, cancellationToken);
        }

        public Task<bool> AllAsync(Expression<Func<T, bool>> predicate, CancellationToken cancellationToken = default)
        {
            return GetQueryable().AllAsync(predicate, cancellationToken);
        }

        private IQueryable<T> GetQueryable(bool tracking = false)
        {
            return tracking ? _dbSet : _dbSet.AsNoTracking();
        }
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> EntityName {
        EntityName::new(name).unwrap()
    }

    #[test]
    fn interface_substitutes_namespace_and_name() {
        let body = CSharpTemplates::new().repository_interface("Shop", &entity("Order"));
        assert!(body.contains("namespace Shop.Infrastructure.Abstractions;"));
        assert!(body.contains("public interface IOrderRepository : IRepository<Order>"));
        assert!(!body.contains("{namespace}"));
        assert!(!body.contains("{name}"));
    }

    #[test]
    fn implementation_binds_context_class() {
        let ctx = ContextName::new("ShopDbContext").unwrap();
        let body = CSharpTemplates::new().repository_implementation("Shop", &entity("Order"), &ctx);
        assert!(body.contains("internal class OrderRepository : Repository<Order>, IOrderRepository"));
        assert!(body.contains("public OrderRepository(ShopDbContext context) : base(context)"));
        assert!(!body.contains("{context_class}"));
    }

    #[test]
    fn uow_interface_property_shape() {
        let line = CSharpTemplates::new().unit_of_work_interface_property(&entity("Customer"));
        assert_eq!(line, "    ICustomerRepository CustomerRepository { get; }\n");
    }

    #[test]
    fn uow_impl_property_resolves_via_cache() {
        let line = CSharpTemplates::new().unit_of_work_implementation_property(&entity("Customer"));
        assert_eq!(
            line,
            "    public ICustomerRepository CustomerRepository => GetCustomRepository<ICustomerRepository>();\n"
        );
    }

    #[test]
    fn uow_footer_has_transaction_lifecycle() {
        let footer = CSharpTemplates::new().unit_of_work_implementation_footer();
        for method in [
            "BeginTransactionAsync",
            "CommitTransactionAsync",
            "RollbackTransactionAsync",
            "SaveChangesAsync",
            "GetRepository<T>",
            "GetCustomRepository<TRepository>",
        ] {
            assert!(footer.contains(method), "missing {method}");
        }
    }

    #[test]
    fn generic_pair_is_namespace_parameterized_only() {
        let iface = CSharpTemplates::new().generic_repository_interface("Shop");
        let imp = CSharpTemplates::new().generic_repository_implementation("Shop");
        assert!(iface.contains("namespace Shop.Infrastructure.Base"));
        assert!(imp.contains("using Shop.Infrastructure.Base;"));
        assert!(iface.contains("Task<bool> AllAsync"));
        assert!(imp.contains("AsNoTracking()"));
    }
}
